// SPDX-License-Identifier: MPL-2.0
//! End-to-end flow over the public library API: form selections drive the
//! request vocabulary, the derived content state drives the composed scene.

use wallforge::api::{AspectRatio, GenerationRequest, StyleKind, Wallpaper};
use wallforge::preview::{compose, ContentState, DeviceKind};
use wallforge::ui::studio::State;

use iced::widget::image::Handle;
use std::sync::Arc;

fn fetched_wallpaper(url: &str) -> Wallpaper {
    let bytes = vec![0_u8; 4];
    Wallpaper {
        url: url.to_string(),
        handle: Handle::from_rgba(1, 1, bytes.clone()),
        bytes: Arc::new(bytes),
        width: 512,
        height: 910,
    }
}

#[test]
fn form_selections_build_the_wire_request() {
    let mut state = State::new();
    state.prompt = "Beautiful sunset over mountains with purple sky".to_string();
    state.style = StyleKind::Nature;
    state.aspect_ratio = AspectRatio::Portrait;

    let request = GenerationRequest::new(
        state.prompt.trim(),
        state.aspect_ratio,
        state.style,
    );

    assert_eq!(
        request.prompt,
        "Beautiful sunset over mountains with purple sky"
    );
    assert_eq!(request.aspect_ratio, "9:16");
    assert_eq!(request.style.as_deref(), Some("nature"));
}

#[test]
fn generation_lifecycle_drives_the_preview_scene() {
    let mut state = State::new();
    state.device = DeviceKind::Pixel;

    // Idle: empty screen, small notch, no home indicator.
    let scene = compose(state.device, state.content_state());
    assert_eq!(scene.screen.content, ContentState::Empty);
    assert!(scene.notch.is_some());
    assert!(scene.home_indicator.is_none());

    // Request in flight: only the screen node changes.
    let seq = state.begin_request();
    let loading_scene = compose(state.device, state.content_state());
    assert_eq!(loading_scene.screen.content, ContentState::Loading);
    assert_eq!(loading_scene.frame, scene.frame);
    assert_eq!(loading_scene.notch, scene.notch);
    assert_eq!(loading_scene.buttons, scene.buttons);

    // Completion: the wallpaper shows, clipped to the Pixel screen radius.
    state.set_wallpaper(fetched_wallpaper("https://x/y.webp"));
    assert!(state.finish_request(seq));
    let image_scene = compose(state.device, state.content_state());
    assert_eq!(
        image_scene.screen.content,
        ContentState::Image("https://x/y.webp".to_string())
    );
    assert_eq!(image_scene.screen.radius, 25.0);
}

#[test]
fn device_switch_between_renders_resolves_new_geometry() {
    let mut state = State::new();
    state.device = DeviceKind::Iphone;
    let iphone_scene = compose(state.device, state.content_state());

    state.device = DeviceKind::Android;
    let android_scene = compose(state.device, state.content_state());

    assert_ne!(iphone_scene.frame.radius, android_scene.frame.radius);
    assert!(iphone_scene.notch.is_some());
    assert!(android_scene.notch.is_none());
}

#[test]
fn config_device_labels_survive_unknown_values() {
    // A config written by a newer release may carry a label this build does
    // not know; the scene must still be a complete iPhone-shaped frame.
    let device = DeviceKind::from_label("foldable-3000");
    assert_eq!(device, DeviceKind::Default);

    let scene = compose(device, ContentState::Empty);
    let reference = compose(DeviceKind::Iphone, ContentState::Empty);
    assert_eq!(scene.frame, reference.frame);
    assert_eq!(scene.notch, reference.notch);
    assert_eq!(scene.home_indicator, reference.home_indicator);
}

#[test]
fn overlapping_requests_resolve_to_the_latest() {
    let mut state = State::new();

    let first = state.begin_request();
    let second = state.begin_request();

    // The first response arrives late; it must not end the newer request.
    assert!(!state.finish_request(first));
    assert_eq!(state.content_state(), ContentState::Loading);

    state.set_wallpaper(fetched_wallpaper("https://x/latest.webp"));
    assert!(state.finish_request(second));
    assert_eq!(
        state.content_state(),
        ContentState::Image("https://x/latest.webp".to_string())
    );
}
