//! Time-range filter pill and popover.
//!
//! SYSTEM CONTEXT
//! ==============
//! Presentation layer over `timerange::TimeRangePicker`. The picker lives in
//! an `RwSignal`; every user event calls one picker transition and then
//! carries out the returned actions: selection changes go to the host via
//! `on_change`, deferred view resets are armed on a browser timer.
//!
//! The host can clear the filter from elsewhere (e.g. "New chat") by bumping
//! `UiState::filter_clear_seq`.

use leptos::prelude::*;
use timerange::deferred::Ticket;
use timerange::{PickerAction, PickerConfig, PickerView, Preset, QuickKey, Selection, SystemClock, TimeRangePicker};

use crate::state::ui::UiState;

type Picker = TimeRangePicker<SystemClock>;

/// Run one picker transition and carry out its actions.
fn dispatch(picker: RwSignal<Picker>, on_change: Callback<Option<Selection>>, f: impl FnOnce(&mut Picker) -> Vec<PickerAction>) {
    let actions = picker.try_update(f).unwrap_or_default();
    for action in actions {
        match action {
            // The signal write above already re-renders.
            PickerAction::Redraw => {}
            PickerAction::SelectionChanged => {
                let selection = picker.with_untracked(|p| p.selection().copied());
                on_change.run(selection);
            }
            PickerAction::ScheduleReset { ticket, delay_ms } => schedule_reset(picker, ticket, delay_ms),
        }
    }
}

fn schedule_reset(picker: RwSignal<Picker>, ticket: Ticket, delay_ms: u32) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(delay_ms, move || {
            // The component may be gone by now; a disposed signal is skipped.
            picker.try_update(|p| p.fire_reset(ticket));
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = delay_ms;
        picker.try_update(|p| p.fire_reset(ticket));
    }
}

/// Time-range filter control.
///
/// `on_change` receives the committed selection (or `None` after a clear).
#[component]
pub fn TimeRangeFilter(
    #[prop(optional)] config: Option<PickerConfig>,
    #[prop(into)] on_change: Callback<Option<Selection>>,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let locale = ui.with_untracked(UiState::locale);
    let picker = RwSignal::new(TimeRangePicker::new(config.unwrap_or_default(), locale, SystemClock));

    let clear_seq = Memo::new(move |_| ui.with(|u| u.filter_clear_seq));
    Effect::new(move |prev: Option<u64>| {
        let seq = clear_seq.get();
        if prev.is_some_and(|prev| prev != seq) {
            dispatch(picker, on_change, Picker::clear);
        }
        seq
    });

    let is_open = Memo::new(move |_| picker.with(Picker::is_open));
    let view = Memo::new(move |_| picker.with(Picker::view));
    let is_active = move || picker.with(|p| p.selection().is_some());

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            dispatch(picker, on_change, Picker::close);
        }
    };

    view! {
        <div class="time-range-filter" on:keydown=on_keydown>
            <button
                class="time-range-filter__trigger"
                class:time-range-filter__trigger--active=is_active
                aria-haspopup="dialog"
                aria-expanded=move || is_open.get().to_string()
                on:click=move |_| dispatch(picker, on_change, Picker::toggle)
            >
                {move || picker.with(Picker::trigger_text)}
            </button>
            <Show when=is_active>
                <button
                    class="time-range-filter__clear"
                    title=move || picker.with(|p| p.locale().ui.clear.clone())
                    on:click=move |_| dispatch(picker, on_change, Picker::clear)
                >
                    "×"
                </button>
            </Show>
            <Show when=move || is_open.get()>
                <div class="time-range-filter__backdrop" on:click=move |_| dispatch(picker, on_change, Picker::close)></div>
                <div class="time-range-filter__popover" role="dialog">
                    {move || match view.get() {
                        PickerView::Menu => menu_panel(picker, on_change),
                        PickerView::Auto => categories_panel(picker, on_change),
                        PickerView::Custom => custom_panel(picker, on_change),
                        PickerView::Month | PickerView::Quarter | PickerView::HalfYear | PickerView::Year => {
                            grid_panel(picker, on_change)
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}

fn back_button(picker: RwSignal<Picker>, on_change: Callback<Option<Selection>>) -> impl IntoView {
    view! {
        <button class="time-range-filter__back" on:click=move |_| dispatch(picker, on_change, Picker::back)>
            "‹ "
            {move || picker.with(|p| p.locale().ui.back.clone())}
        </button>
    }
}

fn quick_pill(picker: RwSignal<Picker>, on_change: Callback<Option<Selection>>, key: QuickKey) -> impl IntoView {
    let label = picker.with_untracked(|p| p.locale().quick_label(key));
    let selected = move || picker.with(|p| p.selection() == Some(&Selection::Quick { key }));
    view! {
        <button
            class="time-range-filter__pill"
            class:time-range-filter__pill--selected=selected
            on:click=move |_| dispatch(picker, on_change, move |p| p.choose_quick(key))
        >
            {label}
        </button>
    }
}

fn category_item(picker: RwSignal<Picker>, on_change: Callback<Option<Selection>>, preset: Preset) -> impl IntoView {
    let label = picker.with_untracked(|p| p.locale().preset_label(preset).to_owned());
    view! {
        <li>
            <button
                class="time-range-filter__item"
                on:click=move |_| dispatch(picker, on_change, move |p| p.choose_category(preset))
            >
                {label}
                " ›"
            </button>
        </li>
    }
}

fn custom_item(picker: RwSignal<Picker>, on_change: Callback<Option<Selection>>) -> AnyView {
    if !picker.with_untracked(|p| p.config().allow_custom) {
        return ().into_any();
    }
    let label = picker.with_untracked(|p| p.locale().ui.custom.clone());
    view! {
        <li>
            <button class="time-range-filter__item" on:click=move |_| dispatch(picker, on_change, Picker::enter_custom)>
                {label}
                " ›"
            </button>
        </li>
    }
    .into_any()
}

fn menu_panel(picker: RwSignal<Picker>, on_change: Callback<Option<Selection>>) -> AnyView {
    let (quick_keys, nested, has_presets) = picker.with_untracked(|p| {
        (p.quick_keys(), p.config().categories_view() == PickerView::Auto, !p.categories().is_empty())
    });
    let ui = picker.with_untracked(|p| p.locale().ui.clone());

    let categories = if !nested {
        picker
            .with_untracked(Picker::categories)
            .into_iter()
            .map(|preset| category_item(picker, on_change, preset))
            .collect_view()
            .into_any()
    } else if has_presets {
        view! {
            <li>
                <button class="time-range-filter__item" on:click=move |_| dispatch(picker, on_change, Picker::enter_auto)>
                    {ui.auto.clone()}
                    " ›"
                </button>
            </li>
        }
        .into_any()
    } else {
        ().into_any()
    };

    view! {
        <div class="time-range-filter__menu">
            <div class="time-range-filter__quick">
                {quick_keys.into_iter().map(|key| quick_pill(picker, on_change, key)).collect_view()}
            </div>
            <ul class="time-range-filter__list">
                {categories}
                {custom_item(picker, on_change)}
            </ul>
        </div>
    }
    .into_any()
}

fn categories_panel(picker: RwSignal<Picker>, on_change: Callback<Option<Selection>>) -> AnyView {
    let presets = picker.with_untracked(Picker::categories);
    view! {
        <div class="time-range-filter__categories">
            {back_button(picker, on_change)}
            <ul class="time-range-filter__list">
                {presets.into_iter().map(|preset| category_item(picker, on_change, preset)).collect_view()}
                {custom_item(picker, on_change)}
            </ul>
        </div>
    }
    .into_any()
}

fn grid_panel(picker: RwSignal<Picker>, on_change: Callback<Option<Selection>>) -> AnyView {
    let is_year_grid = picker.with_untracked(|p| p.view() == PickerView::Year);
    let cells = move || {
        picker
            .with(Picker::grid)
            .into_iter()
            .map(|cell| {
                let value = cell.value;
                view! {
                    <button
                        class="time-range-filter__cell"
                        class:time-range-filter__cell--selected=cell.selected
                        on:click=move |_| dispatch(picker, on_change, move |p| p.choose_cell(value))
                    >
                        {cell.label}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <div class="time-range-filter__grid-panel">
            {back_button(picker, on_change)}
            <div class="time-range-filter__year-nav">
                <button class="time-range-filter__step" on:click=move |_| dispatch(picker, on_change, |p| p.step_year(-1))>
                    "‹"
                </button>
                <span class="time-range-filter__year">
                    {move || if is_year_grid { String::new() } else { picker.with(Picker::picker_year).to_string() }}
                </span>
                <button class="time-range-filter__step" on:click=move |_| dispatch(picker, on_change, |p| p.step_year(1))>
                    "›"
                </button>
            </div>
            <div class="time-range-filter__grid" class:time-range-filter__grid--years=is_year_grid>
                {cells}
            </div>
        </div>
    }
    .into_any()
}

fn custom_panel(picker: RwSignal<Picker>, on_change: Callback<Option<Selection>>) -> AnyView {
    let ui = picker.with_untracked(|p| p.locale().ui.clone());
    let committed = picker.with_untracked(Picker::committed_custom_bounds);

    view! {
        <div class="time-range-filter__custom">
            {back_button(picker, on_change)}
            {committed.map(|(from, to)| view! { <p class="time-range-filter__current">{from}" → "{to}</p> })}
            <label class="time-range-filter__field">
                <span>{ui.from.clone()}</span>
                <input
                    type="date"
                    prop:value=move || picker.with(|p| p.draft().from.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        dispatch(picker, on_change, move |p| p.set_draft_from(value));
                    }
                />
            </label>
            <label class="time-range-filter__field">
                <span>{ui.to.clone()}</span>
                <input
                    type="date"
                    prop:value=move || picker.with(|p| p.draft().to.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        dispatch(picker, on_change, move |p| p.set_draft_to(value));
                    }
                />
            </label>
            <button
                class="btn btn--primary time-range-filter__apply"
                disabled=move || !picker.with(Picker::can_apply)
                on:click=move |_| dispatch(picker, on_change, Picker::apply_custom)
            >
                {ui.apply.clone()}
            </button>
        </div>
    }
    .into_any()
}
