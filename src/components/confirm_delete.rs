//! Confirm Delete Component
//!
//! Two-step removal control for activity rows. The first click arms the
//! control and shows what is about to be deleted; only an explicit second
//! click actually deletes, so a stray click never removes a record.

use leptos::prelude::*;

const SUBJECT_MAX_CHARS: usize = 24;

/// Prompt text for the armed state; long subjects are shortened so the
/// control stays on one line
fn delete_prompt(subject: &str) -> String {
    let shown: String = if subject.chars().count() > SUBJECT_MAX_CHARS {
        let head: String = subject.chars().take(SUBJECT_MAX_CHARS).collect();
        format!("{}…", head.trim_end())
    } else {
        subject.to_string()
    };
    format!("Delete \"{}\"?", shown)
}

#[component]
pub fn ConfirmDelete(
    /// What is being deleted, shown in the armed prompt
    #[prop(into)] subject: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (armed, set_armed) = signal(false);
    let prompt = delete_prompt(&subject);

    view! {
        <span class="confirm-delete">
            {move || if armed.get() {
                let prompt = prompt.clone();
                view! {
                    <span class="confirm-armed">
                        <span class="confirm-prompt">{prompt}</span>
                        <button
                            class="confirm-yes"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                set_armed.set(false);
                                on_confirm.run(());
                            }
                        >
                            "Confirm"
                        </button>
                        <button
                            class="confirm-no"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                set_armed.set(false);
                            }
                        >
                            "Keep"
                        </button>
                    </span>
                }.into_any()
            } else {
                view! {
                    <button
                        class="delete-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_armed.set(true);
                        }
                    >
                        "Delete"
                    </button>
                }.into_any()
            }}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_names_the_subject() {
        assert_eq!(delete_prompt("Smith interview"), "Delete \"Smith interview\"?");
    }

    #[test]
    fn long_subjects_are_shortened() {
        let prompt = delete_prompt("A very long activity title that keeps going");
        assert_eq!(prompt, "Delete \"A very long activity tit…\"?");
    }
}
