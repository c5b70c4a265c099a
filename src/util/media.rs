//! Microphone and camera capture glue.
//!
//! SYSTEM CONTEXT
//! ==============
//! Devices are requested and torn down per user action; there is no pooling
//! and no concurrent-session handling. Permission failures are logged to the
//! console only; the UI presents no recovery path.

#[cfg(test)]
#[path = "media_test.rs"]
mod media_test;

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

/// True for MIME types the audio upload input accepts.
pub fn is_audio_mime(mime: &str) -> bool {
    mime.starts_with("audio/")
}

/// True for MIME types the video upload input accepts.
pub fn is_video_mime(mime: &str) -> bool {
    mime.starts_with("video/")
}

#[cfg(feature = "csr")]
async fn request_user_media(
    constraints: &web_sys::MediaStreamConstraints,
    device: &str,
) -> Option<web_sys::MediaStream> {
    let window = web_sys::window()?;
    let devices = match window.navigator().media_devices() {
        Ok(devices) => devices,
        Err(e) => {
            log::error!("media devices unavailable: {e:?}");
            return None;
        }
    };
    let promise = match devices.get_user_media_with_constraints(constraints) {
        Ok(promise) => promise,
        Err(e) => {
            log::error!("{device} request rejected: {e:?}");
            return None;
        }
    };
    match wasm_bindgen_futures::JsFuture::from(promise).await {
        Ok(value) => Some(web_sys::MediaStream::from(value)),
        Err(e) => {
            log::error!("error accessing {device}: {e:?}");
            None
        }
    }
}

/// Request an audio-only stream from the user's microphone.
#[cfg(feature = "csr")]
pub async fn request_microphone() -> Option<web_sys::MediaStream> {
    let constraints = web_sys::MediaStreamConstraints::new();
    constraints.set_audio(&JsValue::TRUE);
    constraints.set_video(&JsValue::FALSE);
    request_user_media(&constraints, "microphone").await
}

/// Request a video-only stream from the user's camera.
#[cfg(feature = "csr")]
pub async fn request_camera(width: u32, height: u32) -> Option<web_sys::MediaStream> {
    let video = web_sys::MediaTrackConstraints::new();
    video.set_width(&JsValue::from_f64(f64::from(width)));
    video.set_height(&JsValue::from_f64(f64::from(height)));
    let constraints = web_sys::MediaStreamConstraints::new();
    constraints.set_video(&JsValue::from(video));
    constraints.set_audio(&JsValue::FALSE);
    request_user_media(&constraints, "camera").await
}

/// Stop every track on the stream, releasing the device.
#[cfg(feature = "csr")]
pub fn stop_tracks(stream: &web_sys::MediaStream) {
    for track in stream.get_tracks().iter() {
        web_sys::MediaStreamTrack::from(track).stop();
    }
}

/// Start a recorder on `stream`. Collected chunks are assembled into a blob
/// on stop and handed to `on_clip` as an object URL.
#[cfg(feature = "csr")]
pub fn start_recorder(
    stream: &web_sys::MediaStream,
    on_clip: impl Fn(String) + 'static,
) -> Option<web_sys::MediaRecorder> {
    let recorder = match web_sys::MediaRecorder::new(stream) {
        Ok(recorder) => recorder,
        Err(e) => {
            log::error!("recorder creation failed: {e:?}");
            return None;
        }
    };

    let chunks: Rc<RefCell<Vec<web_sys::Blob>>> = Rc::new(RefCell::new(Vec::new()));

    let data_chunks = Rc::clone(&chunks);
    let on_data = Closure::<dyn FnMut(web_sys::BlobEvent)>::new(move |ev: web_sys::BlobEvent| {
        if let Some(blob) = ev.data() {
            data_chunks.borrow_mut().push(blob);
        }
    });
    recorder.set_ondataavailable(Some(on_data.as_ref().unchecked_ref()));
    on_data.forget();

    let on_stop = Closure::<dyn FnMut()>::new(move || {
        let parts = js_sys::Array::new();
        for blob in chunks.borrow().iter() {
            parts.push(blob);
        }
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("audio/webm");
        let assembled =
            web_sys::Blob::new_with_blob_sequence_and_options(&JsValue::from(parts), &options);
        match assembled.and_then(|blob| web_sys::Url::create_object_url_with_blob(&blob)) {
            Ok(url) => on_clip(url),
            Err(e) => log::error!("recording assembly failed: {e:?}"),
        }
    });
    recorder.set_onstop(Some(on_stop.as_ref().unchecked_ref()));
    on_stop.forget();

    if let Err(e) = recorder.start() {
        log::error!("recorder start failed: {e:?}");
        return None;
    }
    Some(recorder)
}

/// Draw the current video frame onto `canvas` and return it as a data URL.
#[cfg(feature = "csr")]
pub fn capture_frame(
    video: &web_sys::HtmlVideoElement,
    canvas: &web_sys::HtmlCanvasElement,
) -> Option<String> {
    canvas.set_width(video.video_width());
    canvas.set_height(video.video_height());
    let ctx = canvas.get_context("2d").ok().flatten()?;
    let ctx: web_sys::CanvasRenderingContext2d = ctx.dyn_into().ok()?;
    if let Err(e) = ctx.draw_image_with_html_video_element(video, 0.0, 0.0) {
        log::error!("frame capture failed: {e:?}");
        return None;
    }
    canvas.to_data_url_with_type("image/jpeg").ok()
}

/// Object URL for an uploaded file, for local playback/preview.
#[cfg(feature = "csr")]
pub fn file_object_url(file: &web_sys::File) -> Option<String> {
    web_sys::Url::create_object_url_with_blob(file).ok()
}
