use leptos::{either::Either, prelude::*, task::spawn_local};

use practice::{
    Practice,
    history::{Attempt, record_attempt},
};
use vocab::Word;

mod api;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}

#[component]
fn App() -> impl IntoView {
    let practice = RwSignal::new(Practice::default());
    let (attempts, set_attempts, _) = leptos_use::storage::use_local_storage::<
        Vec<Attempt>,
        codee::string::JsonSerdeCodec,
    >("word-challenge/attempts".to_owned());

    let next_word = move || {
        spawn_local(async move {
            match api::fetch_word().await {
                Ok(word) => practice.update(|p| p.load_word(word)),
                Err(e) => leptos::logging::error!("Error fetching random word: {}", e),
            }
        });
    };
    next_word();

    let submit = move || {
        let Some(submission) = practice.try_update(Practice::begin_submit).flatten() else {
            return;
        };

        spawn_local(async move {
            let ticket = submission.ticket;
            let validation = match api::validate_sentence(&submission.request).await {
                Ok(validation) => validation,
                Err(e) => {
                    leptos::logging::error!("Error submitting sentence: {}", e);
                    practice.update(|p| p.fail_submit(ticket));
                    return;
                }
            };

            let session = practice
                .try_update(|p| p.complete_submit(ticket, validation))
                .flatten();
            let Some(session) = session else {
                leptos::logging::log!("Dropping grade for word {}", submission.request.word_id);
                return;
            };
            let word = practice.with_untracked(|p| p.word().map(|w| w.word.clone()));

            if let Err(e) = api::save_practice_session(&session).await {
                leptos::logging::error!("Error saving practice session: {}", e);
                return;
            }

            if let Some(word) = word {
                set_attempts.update(|attempts| {
                    record_attempt(
                        attempts,
                        Attempt {
                            word,
                            score: session.score,
                            at: js_sys::Date::now(),
                        },
                    )
                });
            }
        });
    };

    let word = Memo::new(move |_| practice.with(|p| p.word().cloned()));

    move || match word.get() {
        None => Either::Left(view! {
            <div class="flex justify-center items-center h-screen">"Loading word..."</div>
        }),
        Some(word) => Either::Right(view! {
            <div class="container mx-auto p-4 max-w-3xl">
                <h1 class="text-4xl font-extrabold text-center mb-8 text-gray-800">
                    "Word Challenge"
                </h1>
                <Challenge word practice submit next_word />
                <RecentAttempts attempts />
            </div>
        }),
    }
}

#[component]
fn Challenge(
    word: Word,
    practice: RwSignal<Practice>,
    submit: impl Fn() + Copy + Send + Sync + 'static,
    next_word: impl Fn() + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let badge_class = format!(
        "px-4 py-1 rounded-full text-sm font-semibold {}",
        word.difficulty_level.badge_class()
    );
    let submitted = move || practice.with(Practice::is_submitted);

    view! {
        <div class="bg-white p-8 rounded-2xl shadow-xl mb-6 border border-gray-100">
            <div class="flex justify-between items-center mb-4">
                <h2 class="text-3xl font-bold text-primary">{word.word.clone()}</h2>
                <span class=badge_class>{word.difficulty_level.label().to_owned()}</span>
            </div>

            <p class="text-lg text-gray-700 mb-6">{word.definition.clone()}</p>

            <textarea
                class="w-full p-4 border border-gray-300 rounded-lg text-lg"
                rows=4
                placeholder="Type your sentence..."
                aria-label="sentence"
                prop:value=move || practice.with(|p| p.sentence().to_owned())
                on:input=move |e| {
                    let sentence = event_target_value(&e);
                    practice.update(|p| p.edit(sentence));
                }
                disabled=move || practice.with(Practice::is_locked)
            ></textarea>

            <div class="flex justify-between items-center mt-6">
                {move || {
                    practice
                        .with(Practice::score_text)
                        .map(|score| view! { <p class="text-xl font-bold">"Score: " {score}</p> })
                }}
                <div class="flex gap-3">
                    {move || {
                        if submitted() {
                            Either::Left(view! {
                                <button
                                    type="button"
                                    class="px-6 py-3 bg-gray-500 text-white rounded-lg"
                                    on:click=move |_| practice.update(Practice::retry)
                                >
                                    "Retry"
                                </button>
                                <button
                                    type="button"
                                    class="px-6 py-3 bg-blue-600 text-white rounded-lg"
                                    on:click=move |_| next_word()
                                >
                                    "Next Word"
                                </button>
                            })
                        } else {
                            Either::Right(view! {
                                <button
                                    type="button"
                                    class="px-6 py-3 bg-primary text-white rounded-lg"
                                    disabled=move || !practice.with(Practice::can_submit)
                                    on:click=move |_| submit()
                                >
                                    "Submit"
                                </button>
                            })
                        }
                    }}
                </div>
            </div>

            <Show when=submitted>
                <div class="mt-6">
                    <p class="font-semibold text-gray-800">
                        "Feedback: "
                        {move || practice.with(|p| p.feedback().unwrap_or_default().to_owned())}
                    </p>
                    <p class="mt-2 text-gray-700">
                        "Corrected Sentence: "
                        {move || practice.with(|p| p.corrected().unwrap_or_default().to_owned())}
                    </p>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn RecentAttempts(#[prop(into)] attempts: Signal<Vec<Attempt>>) -> impl IntoView {
    view! {
        <Show when=move || attempts.with(|a| !a.is_empty())>
            <section class="bg-white p-6 rounded-2xl shadow border border-gray-100">
                <h3 class="text-xl font-bold mb-3 text-gray-800">"Recent attempts"</h3>
                <ul class="divide-y divide-gray-100">
                    <For
                        each=move || attempts.get()
                        key=|attempt| attempt.at.to_bits()
                        let(attempt)
                    >
                        <li class="flex justify-between py-2">
                            <span>{attempt.word}</span>
                            <span class="font-semibold">{format!("{:.1}", attempt.score)}</span>
                        </li>
                    </For>
                </ul>
            </section>
        </Show>
    }
}
