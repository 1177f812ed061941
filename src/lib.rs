// SPDX-License-Identifier: MPL-2.0
//! `wallforge` is a desktop AI wallpaper studio built with the Iced GUI
//! framework.
//!
//! A prompt form drives a generation backend over HTTP and the result is
//! shown inside a stylized phone-frame preview. The preview core
//! ([`preview`]) is pure and stateless; everything around it (API client,
//! download, configuration, notifications) lives in the other modules.

#![doc(html_root_url = "https://docs.rs/wallforge/0.2.0")]

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod preview;
pub mod ui;
