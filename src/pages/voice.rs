//! Voice analysis page: record from the microphone or upload a clip.
//!
//! The microphone is requested per recording and every track is stopped on
//! stop, releasing the device. Permission failures are logged only.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::analysis::{ProviderHandle, VoiceReport};
use crate::components::analysis_nav::AnalysisNavigation;
use crate::components::app_shell::AppShell;
use crate::components::confidence_bar::ConfidenceBar;
use crate::state::session::use_session;
use crate::util::format::format_elapsed;
use crate::util::guard::install_unauth_redirect;

#[component]
pub fn VoiceAnalysisPage() -> impl IntoView {
    let session = use_session();
    install_unauth_redirect(session, use_navigate());
    let provider = expect_context::<ProviderHandle>();

    let clip_url = RwSignal::new(None::<String>);
    let clip_label = RwSignal::new(String::new());
    let recording = RwSignal::new(false);
    let elapsed_secs = RwSignal::new(0_u32);
    let analyzing = RwSignal::new(false);
    let result = RwSignal::new(None::<VoiceReport>);

    #[cfg(feature = "csr")]
    let stream_handle = std::rc::Rc::new(std::cell::RefCell::new(None::<web_sys::MediaStream>));
    #[cfg(feature = "csr")]
    let recorder_handle =
        std::rc::Rc::new(std::cell::RefCell::new(None::<web_sys::MediaRecorder>));
    #[cfg(feature = "csr")]
    let ticker =
        std::rc::Rc::new(std::cell::RefCell::new(None::<gloo_timers::callback::Interval>));

    #[cfg(feature = "csr")]
    let on_record_toggle = {
        use std::rc::Rc;
        let stream_handle = Rc::clone(&stream_handle);
        let recorder_handle = Rc::clone(&recorder_handle);
        let ticker = Rc::clone(&ticker);
        move |_: leptos::ev::MouseEvent| {
            if recording.get() {
                if let Some(recorder) = recorder_handle.borrow_mut().take() {
                    if let Err(e) = recorder.stop() {
                        log::error!("recorder stop failed: {e:?}");
                    }
                }
                if let Some(stream) = stream_handle.borrow_mut().take() {
                    crate::util::media::stop_tracks(&stream);
                }
                ticker.borrow_mut().take();
                recording.set(false);
                return;
            }

            let stream_handle = Rc::clone(&stream_handle);
            let recorder_handle = Rc::clone(&recorder_handle);
            let ticker = Rc::clone(&ticker);
            leptos::task::spawn_local(async move {
                let Some(stream) = crate::util::media::request_microphone().await else {
                    return;
                };
                let recorder = crate::util::media::start_recorder(&stream, move |url| {
                    clip_url.set(Some(url));
                    clip_label.set("recording.webm".to_owned());
                });
                let Some(recorder) = recorder else {
                    crate::util::media::stop_tracks(&stream);
                    return;
                };
                *stream_handle.borrow_mut() = Some(stream);
                *recorder_handle.borrow_mut() = Some(recorder);
                elapsed_secs.set(0);
                *ticker.borrow_mut() =
                    Some(gloo_timers::callback::Interval::new(1000, move || {
                        elapsed_secs.update(|secs| *secs += 1);
                    }));
                recording.set(true);
            });
        }
    };
    #[cfg(not(feature = "csr"))]
    let on_record_toggle = move |_: leptos::ev::MouseEvent| {};

    #[cfg(feature = "csr")]
    let on_upload = move |ev: leptos::ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        if !crate::util::media::is_audio_mime(&file.type_()) {
            log::warn!("rejected non-audio upload: {}", file.type_());
            return;
        }
        if let Some(url) = crate::util::media::file_object_url(&file) {
            clip_url.set(Some(url));
            clip_label.set(file.name());
            result.set(None);
        }
    };
    #[cfg(not(feature = "csr"))]
    let on_upload = move |_: leptos::ev::Event| {};

    let on_analyze = move |_| {
        if analyzing.get() || clip_url.get().is_none() {
            return;
        }
        analyzing.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            crate::util::latency::artificial_delay(crate::net::endpoints::ANALYSIS_DELAY_MS).await;
            let clip = clip_url.get_untracked().unwrap_or_default();
            match provider.0.voice(&clip) {
                Ok(report) => result.set(Some(report)),
                Err(e) => crate::util::notice::blocking_notice(&e.to_string()),
            }
            analyzing.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = provider;
            analyzing.set(false);
        }
    };

    view! {
        <AppShell>
            <div class="analysis-page">
                <AnalysisNavigation/>
                <header>
                    <h1>"Voice Analysis"</h1>
                    <p class="page-subtitle">
                        "Analyze vocal patterns and stress indicators for deception detection"
                    </p>
                </header>

                <div class="analysis-page__columns">
                    <section class="panel">
                        <h2 class="panel__title">"Audio Input"</h2>
                        <div class="recorder">
                            <button
                                class=move || {
                                    if recording.get() {
                                        "btn btn--danger"
                                    } else {
                                        "btn btn--primary"
                                    }
                                }
                                on:click=on_record_toggle
                            >
                                {move || {
                                    if recording.get() { "Stop Recording" } else { "Start Recording" }
                                }}
                            </button>
                            <Show when=move || recording.get()>
                                <span class="recorder__elapsed">
                                    {move || format_elapsed(elapsed_secs.get())}
                                </span>
                            </Show>
                        </div>

                        <label class="upload">
                            "Or upload an audio file"
                            <input
                                type="file"
                                accept="audio/*"
                                on:change=on_upload
                                disabled=move || recording.get()
                            />
                        </label>

                        <Show when=move || clip_url.get().is_some()>
                            <div class="clip-preview">
                                <span class="clip-preview__name">{move || clip_label.get()}</span>
                                <audio controls=true src=move || clip_url.get().unwrap_or_default()>
                                </audio>
                            </div>
                        </Show>

                        <div class="panel__actions">
                            <button
                                class="btn btn--primary"
                                on:click=on_analyze
                                disabled=move || analyzing.get() || clip_url.get().is_none()
                            >
                                {move || {
                                    if analyzing.get() { "Analyzing Audio..." } else { "Analyze Audio" }
                                }}
                            </button>
                        </div>
                    </section>

                    <section class="panel">
                        {move || match result.get() {
                            Some(report) => {
                                let f = report.features.clone();
                                view! {
                                    <div class="voice-result">
                                        <h2 class="panel__title">"Result"</h2>
                                        <p class="voice-result__verdict">{report.verdict.label()}</p>
                                        <ConfidenceBar label="Confidence" value=report.confidence/>
                                        <dl class="voice-result__features">
                                            <dt>"Pitch mean"</dt>
                                            <dd>{format!("{:.1} Hz", f.pitch_mean_hz)}</dd>
                                            <dt>"Pitch variance"</dt>
                                            <dd>{format!("{:.1}", f.pitch_variance)}</dd>
                                            <dt>"MFCC"</dt>
                                            <dd>
                                                {f
                                                    .mfcc
                                                    .iter()
                                                    .map(|v| format!("{v:.1}"))
                                                    .collect::<Vec<_>>()
                                                    .join(", ")}
                                            </dd>
                                            <dt>"Jitter"</dt>
                                            <dd>{format!("{:.3}", f.jitter)}</dd>
                                            <dt>"Shimmer"</dt>
                                            <dd>{format!("{:.3}", f.shimmer)}</dd>
                                            <dt>"Spectral centroid"</dt>
                                            <dd>{format!("{:.1} Hz", f.spectral_centroid_hz)}</dd>
                                        </dl>
                                    </div>
                                }
                                    .into_any()
                            }
                            None => {
                                view! {
                                    <div class="panel__empty">
                                        <h3>"Ready for Voice Analysis"</h3>
                                        <p>"Record or upload audio, then run the analysis."</p>
                                    </div>
                                }
                                    .into_any()
                            }
                        }}
                    </section>
                </div>
            </div>
        </AppShell>
    }
}
