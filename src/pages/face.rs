//! Face analysis page: live camera capture or video upload.
//!
//! The camera is requested per session and torn down on stop; a still frame
//! can be grabbed onto a hidden canvas for analysis.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::analysis::{FaceReport, ProviderHandle};
use crate::components::analysis_nav::AnalysisNavigation;
use crate::components::app_shell::AppShell;
use crate::components::confidence_bar::ConfidenceBar;
use crate::state::session::use_session;
use crate::util::guard::install_unauth_redirect;

const CAPTURE_WIDTH: u32 = 640;
const CAPTURE_HEIGHT: u32 = 480;

#[component]
pub fn FaceAnalysisPage() -> impl IntoView {
    let session = use_session();
    install_unauth_redirect(session, use_navigate());
    let provider = expect_context::<ProviderHandle>();

    let media_url = RwSignal::new(None::<String>);
    let media_label = RwSignal::new(String::new());
    let capturing = RwSignal::new(false);
    let analyzing = RwSignal::new(false);
    let result = RwSignal::new(None::<FaceReport>);

    let video_ref = NodeRef::<leptos::html::Video>::new();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "csr")]
    let stream_handle = std::rc::Rc::new(std::cell::RefCell::new(None::<web_sys::MediaStream>));

    #[cfg(feature = "csr")]
    let on_camera_toggle = {
        use std::rc::Rc;
        let stream_handle = Rc::clone(&stream_handle);
        move |_: leptos::ev::MouseEvent| {
            if capturing.get() {
                if let Some(stream) = stream_handle.borrow_mut().take() {
                    crate::util::media::stop_tracks(&stream);
                }
                if let Some(video) = video_ref.get_untracked() {
                    video.set_src_object(None);
                }
                capturing.set(false);
                return;
            }

            let stream_handle = Rc::clone(&stream_handle);
            leptos::task::spawn_local(async move {
                let Some(stream) =
                    crate::util::media::request_camera(CAPTURE_WIDTH, CAPTURE_HEIGHT).await
                else {
                    return;
                };
                if let Some(video) = video_ref.get_untracked() {
                    video.set_src_object(Some(&stream));
                }
                *stream_handle.borrow_mut() = Some(stream);
                capturing.set(true);
            });
        }
    };
    #[cfg(not(feature = "csr"))]
    let on_camera_toggle = move |_: leptos::ev::MouseEvent| {};

    let on_capture = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            if !capturing.get() {
                return;
            }
            if let (Some(video), Some(canvas)) =
                (video_ref.get_untracked(), canvas_ref.get_untracked())
            {
                if let Some(url) = crate::util::media::capture_frame(&video, &canvas) {
                    media_url.set(Some(url));
                    media_label.set("capture.jpg".to_owned());
                    result.set(None);
                }
            }
        }
    };

    #[cfg(feature = "csr")]
    let on_upload = move |ev: leptos::ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        if !crate::util::media::is_video_mime(&file.type_()) {
            log::warn!("rejected non-video upload: {}", file.type_());
            return;
        }
        if let Some(url) = crate::util::media::file_object_url(&file) {
            media_url.set(Some(url));
            media_label.set(file.name());
            result.set(None);
        }
    };
    #[cfg(not(feature = "csr"))]
    let on_upload = move |_: leptos::ev::Event| {};

    let on_analyze = move |_| {
        if analyzing.get() || (media_url.get().is_none() && !capturing.get()) {
            return;
        }
        analyzing.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            crate::util::latency::artificial_delay(crate::net::endpoints::ANALYSIS_DELAY_MS).await;
            let frame = media_url.get_untracked().unwrap_or_default();
            match provider.0.face(&frame) {
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
                    <h1>"Face Analysis"</h1>
                    <p class="page-subtitle">
                        "Analyze facial expressions and micro-expressions for deception detection"
                    </p>
                </header>

                <div class="analysis-page__columns">
                    <section class="panel">
                        <h2 class="panel__title">"Video Input"</h2>

                        <video
                            class=move || {
                                if capturing.get() {
                                    "camera-preview"
                                } else {
                                    "camera-preview camera-preview--hidden"
                                }
                            }
                            node_ref=video_ref
                            autoplay=true
                            prop:muted=true
                        ></video>
                        <canvas class="camera-canvas" node_ref=canvas_ref></canvas>

                        <div class="panel__actions">
                            <button
                                class=move || {
                                    if capturing.get() {
                                        "btn btn--danger"
                                    } else {
                                        "btn btn--primary"
                                    }
                                }
                                on:click=on_camera_toggle
                            >
                                {move || {
                                    if capturing.get() { "Stop Camera" } else { "Start Camera" }
                                }}
                            </button>
                            <button
                                class="btn"
                                on:click=on_capture
                                disabled=move || !capturing.get()
                            >
                                "Capture Frame"
                            </button>
                        </div>

                        <label class="upload">
                            "Or upload a video file"
                            <input
                                type="file"
                                accept="video/*"
                                on:change=on_upload
                                disabled=move || capturing.get()
                            />
                        </label>

                        <Show when=move || media_url.get().is_some()>
                            <p class="clip-preview__name">{move || media_label.get()}</p>
                        </Show>

                        <div class="panel__actions">
                            <button
                                class="btn btn--primary"
                                on:click=on_analyze
                                disabled=move || {
                                    analyzing.get()
                                        || (media_url.get().is_none() && !capturing.get())
                                }
                            >
                                {move || {
                                    if analyzing.get() { "Analyzing Video..." } else { "Analyze Video" }
                                }}
                            </button>
                        </div>
                    </section>

                    <section class="panel">
                        {move || match result.get() {
                            Some(report) => {
                                view! {
                                    <div class="face-result">
                                        <h2 class="panel__title">"Result"</h2>
                                        <p class="face-result__verdict">{report.verdict.label()}</p>
                                        <ConfidenceBar label="Confidence" value=report.confidence/>
                                        <div class="face-result__emotions">
                                            {report
                                                .emotions
                                                .entries()
                                                .into_iter()
                                                .map(|(label, value)| {
                                                    view! { <ConfidenceBar label=label value=value/> }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                        <ul class="face-result__micro">
                                            {report
                                                .micro_expressions
                                                .iter()
                                                .map(|cue| view! { <li>{cue.clone()}</li> })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    </div>
                                }
                                    .into_any()
                            }
                            None => {
                                view! {
                                    <div class="panel__empty">
                                        <h3>"Ready for Face Analysis"</h3>
                                        <p>
                                            "Start the camera or upload footage, then run the analysis."
                                        </p>
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
