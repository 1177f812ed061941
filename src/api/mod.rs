// SPDX-License-Identifier: MPL-2.0
//! Collaborators around the preview core: the generation backend client and
//! the wallpaper download/save utility.

pub mod client;
pub mod download;

pub use client::{
    fetch_image, generate, AspectRatio, GenerationRequest, GenerationResponse, StyleKind,
    Wallpaper,
};
