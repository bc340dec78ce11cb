// src/fetch.rs
//
// Background fetch plumbing: a page refresh runs on one worker thread,
// fans its independent GETs out across scoped threads, and reports back
// through a channel drained by the UI loop. No cancellation; when the
// fetch parameters change mid-flight the UI queues one refresh and
// drops the stale outcome when it lands.

use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread::{self, ScopedJoinHandle};

use eframe::egui;

use crate::api::{self, ApiClient, ApiError};
use crate::config::{options::PageKind, state::AppState};
use crate::gui::pages::{Page, PageData};
use crate::model::CrawlStatus;

pub enum Outcome {
    Page {
        kind: PageKind,
        result: Result<PageData, ApiError>,
    },
    Crawl(Result<CrawlStatus, ApiError>),
    CrawlTriggered(Result<(), ApiError>),
}

pub fn spawn_page_fetch(
    api: Arc<ApiClient>,
    state: AppState,
    page: &'static dyn Page,
    tx: Sender<Outcome>,
    egui_ctx: egui::Context,
) {
    let kind = page.kind();
    thread::spawn(move || {
        let result = page.fetch(&api, &state);
        match &result {
            Ok(_) => logf!("Fetch: OK page={:?}", kind),
            Err(e) => loge!("Fetch: Error page={:?}: {}", kind, e),
        }
        let _ = tx.send(Outcome::Page { kind, result });
        egui_ctx.request_repaint();
    });
}

pub fn spawn_crawl_poll(api: Arc<ApiClient>, tx: Sender<Outcome>, egui_ctx: egui::Context) {
    thread::spawn(move || {
        let result = api::crawl::status(&api);
        let _ = tx.send(Outcome::Crawl(result));
        egui_ctx.request_repaint();
    });
}

pub fn spawn_crawl_trigger(api: Arc<ApiClient>, tx: Sender<Outcome>, egui_ctx: egui::Context) {
    thread::spawn(move || {
        let result = api::crawl::trigger(&api);
        let _ = tx.send(Outcome::CrawlTriggered(result));
        egui_ctx.request_repaint();
    });
}

/// Collect a scoped fan-out branch; a panicked branch counts as failed.
pub fn join_branch<T>(h: ScopedJoinHandle<'_, Result<T, ApiError>>) -> Result<T, ApiError> {
    h.join().unwrap_or(Err(ApiError::Worker))
}

/// Degrade a secondary request to its default, keeping a log trail.
pub fn or_default<T: Default>(what: &str, r: Result<T, ApiError>) -> T {
    r.unwrap_or_else(|e| {
        loge!("Fetch: {} degraded: {}", what, e);
        T::default()
    })
}
