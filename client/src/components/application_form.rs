//! Mission application wizard UI.
//!
//! SYSTEM CONTEXT
//! ==============
//! All behaviour lives in `mission::Wizard`; this component keeps one in a
//! `RwSignal` and maps DOM events onto its methods:
//!
//! - `input`/`change` -> `Wizard::apply`
//! - `blur` -> `Wizard::touch`
//! - footer buttons -> `next` / `back` / `submit` / `reset_all`
//! - verification widget callbacks -> `apply_verification`
//!
//! The step body is keyed on a memo of the wizard state, so typing never
//! rebuilds the inputs.

#[cfg(test)]
#[path = "application_form_test.rs"]
mod application_form_test;

use leptos::prelude::*;
use mission::catalog::{PLANETS, planet_by_id};
use mission::validation::{DestinationPolicy, EXPERIENCE_MAX, MOTIVATION_MAX};
use mission::{
    CompletedApplication, CrewRole, Field, FieldUpdate, MissionApplication, Step, ValidationContext, VerificationEvent, Wizard,
    WizardState,
};

use crate::components::star_rating::StarRating;
use crate::components::verification::VerificationWidget;
use crate::util::clock;

const EMPTY_VALUE: &str = "—";

fn context() -> ValidationContext {
    ValidationContext::new(clock::today()).with_destinations(DestinationPolicy::KnownPlanet)
}

/// Visible label of a field's form control.
pub(crate) fn field_label(field: Field) -> &'static str {
    match field {
        Field::FullName => "Imię i nazwisko",
        Field::Email => "E-mail",
        Field::Callsign => "Znak wywoławczy",
        Field::Role => "Rola w załodze",
        Field::PreferredDestination => "Preferowany cel",
        Field::ExperienceLevel => "Doświadczenie",
        Field::Motivation => "Motywacja",
        Field::AvailabilityDate => "Data dostępności",
        Field::TermsAccepted => "Regulamin",
        Field::RecaptchaToken => "Weryfikacja",
    }
}

pub(crate) fn motivation_counter(text: &str) -> String {
    format!("{}/{MOTIVATION_MAX} znaków", text.chars().count())
}

/// Rows of the read-only summary on the review step.
pub(crate) fn review_rows(doc: &MissionApplication) -> Vec<(&'static str, String)> {
    let or_dash = |s: &str| if s.trim().is_empty() { EMPTY_VALUE.to_owned() } else { s.to_owned() };
    vec![
        ("Imię i nazwisko", or_dash(&doc.full_name)),
        ("E-mail", or_dash(&doc.email)),
        ("Znak wywoławczy", or_dash(&doc.callsign)),
        ("Rola", doc.role.map_or_else(|| EMPTY_VALUE.to_owned(), |r| r.label().to_owned())),
        (
            "Cel misji",
            planet_by_id(&doc.preferred_destination).map_or_else(|| EMPTY_VALUE.to_owned(), |p| p.name.to_owned()),
        ),
        ("Doświadczenie", format!("{}/{EXPERIENCE_MAX}", doc.experience_level)),
    ]
}

/// Step indicator dot: reached steps are active.
pub(crate) fn dot_active(step: Step, current: Step) -> bool {
    step <= current
}

/// Connector after `step`: active once the wizard is past it.
pub(crate) fn connector_active(step: Step, current: Step) -> bool {
    step < current
}

fn record_submission(done: &CompletedApplication) {
    #[cfg(feature = "hydrate")]
    {
        match done.to_json() {
            Ok(json) => log::info!("mission application submitted: {json}"),
            Err(e) => log::error!("mission application could not be serialized: {e}"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = done;
}

#[component]
pub fn ApplicationForm() -> impl IntoView {
    let wizard = RwSignal::new(Wizard::new());
    let state = Memo::new(move |_| wizard.with(Wizard::state));

    let on_back = move |_| {
        wizard.update(|w| {
            let _ = w.back();
        });
    };
    let on_next = move |_| {
        wizard.update(|w| {
            let _ = w.next(&context());
        });
    };
    let on_submit = move |_| {
        if let Some(Ok(done)) = wizard.try_update(|w| w.submit(&context())) {
            record_submission(&done);
        }
    };
    let on_reset = move |_| {
        wizard.update(|w| {
            let _ = w.reset_all();
        });
    };

    let body = move || match state.get() {
        WizardState::Personal => view! { <PersonalStep wizard=wizard /> }.into_any(),
        WizardState::Preferences => view! { <PreferencesStep wizard=wizard /> }.into_any(),
        WizardState::Review => view! { <ReviewStep wizard=wizard /> }.into_any(),
        WizardState::Submitted => view! {
            <div class="application-form__done">
                <div class="application-form__done-icon" aria-hidden="true">"✓"</div>
                <h3>"Aplikacja wysłana!"</h3>
                <p>"Dziękujemy za zgłoszenie. Nasz zespół rekrutacyjny skontaktuje się z Tobą wkrótce."</p>
                <button type="button" class="btn btn--primary" on:click=on_reset>
                    "Złóż kolejną aplikację"
                </button>
            </div>
        }
        .into_any(),
    };

    view! {
        <section class="application-form card">
            <header class="application-form__header">
                <h2>"Aplikuj na misję"</h2>
                <p class="application-form__subtitle">"Dołącz do załogi CosmicVoyager w trzech krokach."</p>
            </header>
            <Show when=move || state.get() != WizardState::Submitted>
                <StepIndicator state=state />
            </Show>
            <div class="application-form__body">{body}</div>
            <Show when=move || state.get() != WizardState::Submitted>
                <footer class="application-form__footer">
                    <button
                        type="button"
                        class="btn btn--ghost"
                        disabled=move || state.get() == WizardState::Personal
                        on:click=on_back
                    >
                        "Wstecz"
                    </button>
                    <Show
                        when=move || state.get() == WizardState::Review
                        fallback=move || {
                            view! {
                                <button type="button" class="btn btn--primary" on:click=on_next>
                                    "Dalej"
                                </button>
                            }
                        }
                    >
                        <button type="button" class="btn btn--primary" on:click=on_submit>
                            "Wyślij aplikację"
                        </button>
                    </Show>
                </footer>
            </Show>
        </section>
    }
}

#[component]
fn StepIndicator(state: Memo<WizardState>) -> impl IntoView {
    let current = move || state.get().step().unwrap_or(Step::Review);
    let items = Step::ALL
        .into_iter()
        .map(|step| {
            let connector = step.next().map(|_| {
                view! {
                    <span
                        class="step-indicator__connector"
                        class:step-indicator__connector--active=move || connector_active(step, current())
                    ></span>
                }
            });
            view! {
                <li class="step-indicator__item">
                    <span
                        class="step-indicator__dot"
                        class:step-indicator__dot--active=move || dot_active(step, current())
                        aria-current=move || (step == current()).then_some("step")
                    >
                        {step.index() + 1}
                    </span>
                    <span class="step-indicator__label">{step.label()}</span>
                    {connector}
                </li>
            }
        })
        .collect_view();

    view! { <ol class="step-indicator">{items}</ol> }
}

/// Label, description, control and the field's error message.
#[component]
fn FormField(
    wizard: RwSignal<Wizard>,
    field: Field,
    #[prop(optional)] hint: &'static str,
    children: Children,
) -> impl IntoView {
    let error = move || wizard.with(|w| w.error_message(field));
    view! {
        <div class="form-field" class:form-field--invalid=move || error().is_some()>
            <label class="form-field__label" for=field.key()>{field_label(field)}</label>
            {(!hint.is_empty()).then(|| view! { <p class="form-field__hint">{hint}</p> })}
            {children()}
            <p class="form-field__error" role="alert" id=format!("{}-error", field.key())>
                {move || error().unwrap_or_default()}
            </p>
        </div>
    }
}

fn edit(wizard: RwSignal<Wizard>, update: FieldUpdate) {
    wizard.update(|w| {
        w.apply(update, &context());
    });
}

fn touch(wizard: RwSignal<Wizard>, field: Field) {
    wizard.update(|w| w.touch(field, &context()));
}

#[component]
fn TextInput(
    wizard: RwSignal<Wizard>,
    field: Field,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] placeholder: &'static str,
    read: fn(&MissionApplication) -> String,
    write: fn(String) -> FieldUpdate,
) -> impl IntoView {
    view! {
        <input
            id=field.key()
            name=field.key()
            type=kind
            class="form-field__input"
            placeholder=placeholder
            aria-describedby=format!("{}-error", field.key())
            prop:value=move || wizard.with(|w| read(w.document()))
            on:input=move |ev| edit(wizard, write(event_target_value(&ev)))
            on:blur=move |_| touch(wizard, field)
        />
    }
}

#[component]
fn PersonalStep(wizard: RwSignal<Wizard>) -> impl IntoView {
    let role_value = move || wizard.with(|w| w.document().role.map_or("", CrewRole::as_str));
    let roles = CrewRole::ALL
        .into_iter()
        .map(|role| view! { <option value=role.as_str()>{role.label()}</option> })
        .collect_view();

    view! {
        <div class="application-form__step">
            <FormField wizard=wizard field=Field::FullName>
                <TextInput
                    wizard=wizard
                    field=Field::FullName
                    placeholder="Jan Kowalski"
                    read=|d| d.full_name.clone()
                    write=FieldUpdate::FullName
                />
            </FormField>
            <FormField wizard=wizard field=Field::Email>
                <TextInput
                    wizard=wizard
                    field=Field::Email
                    kind="email"
                    placeholder="jan@example.com"
                    read=|d| d.email.clone()
                    write=FieldUpdate::Email
                />
            </FormField>
            <FormField
                wizard=wizard
                field=Field::Callsign
                hint="Dwie wielkie litery, myślnik i 3-5 cyfr."
            >
                <TextInput
                    wizard=wizard
                    field=Field::Callsign
                    placeholder="PL-4521"
                    read=|d| d.callsign.clone()
                    write=FieldUpdate::Callsign
                />
            </FormField>
            <FormField wizard=wizard field=Field::Role>
                <select
                    id=Field::Role.key()
                    class="form-field__input"
                    prop:value=role_value
                    on:change=move |ev| edit(wizard, FieldUpdate::Role(CrewRole::parse(&event_target_value(&ev))))
                    on:blur=move |_| touch(wizard, Field::Role)
                >
                    <option value="">"Wybierz rolę"</option>
                    {roles}
                </select>
            </FormField>
        </div>
    }
}

#[component]
fn PreferencesStep(wizard: RwSignal<Wizard>) -> impl IntoView {
    let destinations = PLANETS
        .iter()
        .map(|p| view! { <option value=p.id>{p.name}</option> })
        .collect_view();
    let experience = Signal::derive(move || wizard.with(|w| w.document().experience_level));
    let on_experience = Callback::new(move |level: u8| {
        edit(wizard, FieldUpdate::ExperienceLevel(level));
        touch(wizard, Field::ExperienceLevel);
    });
    let counter = move || wizard.with(|w| motivation_counter(&w.document().motivation));

    view! {
        <div class="application-form__step">
            <FormField wizard=wizard field=Field::PreferredDestination>
                <select
                    id=Field::PreferredDestination.key()
                    class="form-field__input"
                    prop:value=move || wizard.with(|w| w.document().preferred_destination.clone())
                    on:change=move |ev| edit(wizard, FieldUpdate::PreferredDestination(event_target_value(&ev)))
                    on:blur=move |_| touch(wizard, Field::PreferredDestination)
                >
                    <option value="">"Wybierz planetę"</option>
                    {destinations}
                </select>
            </FormField>
            <FormField
                wizard=wizard
                field=Field::ExperienceLevel
                hint="Oceń swoje doświadczenie w lotach kosmicznych."
            >
                <StarRating value=experience on_change=on_experience max=EXPERIENCE_MAX label=field_label(Field::ExperienceLevel) />
            </FormField>
            <FormField wizard=wizard field=Field::Motivation>
                <textarea
                    id=Field::Motivation.key()
                    class="form-field__input form-field__textarea"
                    rows="5"
                    placeholder="Dlaczego chcesz polecieć?"
                    prop:value=move || wizard.with(|w| w.document().motivation.clone())
                    on:input=move |ev| edit(wizard, FieldUpdate::Motivation(event_target_value(&ev)))
                    on:blur=move |_| touch(wizard, Field::Motivation)
                ></textarea>
                <span class="form-field__counter">{counter}</span>
            </FormField>
            <FormField wizard=wizard field=Field::AvailabilityDate>
                <TextInput
                    wizard=wizard
                    field=Field::AvailabilityDate
                    kind="date"
                    read=|d| d.availability_date.clone()
                    write=FieldUpdate::AvailabilityDate
                />
            </FormField>
        </div>
    }
}

#[component]
fn ReviewStep(wizard: RwSignal<Wizard>) -> impl IntoView {
    let rows = move || {
        wizard.with(|w| {
            review_rows(w.document())
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <div class="review__row">
                            <dt>{label}</dt>
                            <dd>{value}</dd>
                        </div>
                    }
                })
                .collect_view()
        })
    };
    let on_verification = Callback::new(move |event: VerificationEvent| {
        // The widget reports once more while unmounting, possibly after the form is gone.
        let _ = wizard.try_update(|w| w.apply_verification(event));
    });
    let outside = move || wizard.with(Wizard::errors_outside_step);

    view! {
        <div class="application-form__step">
            <Show when=move || !outside().is_empty()>
                <div class="application-form__summary" role="alert">
                    <p>"Popraw pola z poprzednich kroków:"</p>
                    <ul>
                        {move || {
                            outside()
                                .into_iter()
                                .map(|(field, message)| view! { <li>{field_label(field)} ": " {message}</li> })
                                .collect_view()
                        }}
                    </ul>
                </div>
            </Show>
            <dl class="review">{rows}</dl>
            <FormField wizard=wizard field=Field::TermsAccepted>
                <label class="form-field__checkbox">
                    <input
                        id=Field::TermsAccepted.key()
                        type="checkbox"
                        prop:checked=move || wizard.with(|w| w.document().terms_accepted)
                        on:change=move |ev| {
                            edit(wizard, FieldUpdate::TermsAccepted(event_target_checked(&ev)));
                            touch(wizard, Field::TermsAccepted);
                        }
                    />
                    "Akceptuję regulamin programu CosmicVoyager"
                </label>
            </FormField>
            <FormField wizard=wizard field=Field::RecaptchaToken>
                <VerificationWidget on_event=on_verification />
            </FormField>
        </div>
    }
}
