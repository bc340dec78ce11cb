// src/gui/app.rs
use std::{
    collections::{HashMap, HashSet},
    error::Error,
    sync::{Arc, Mutex, mpsc},
    time::{Duration, Instant},
};

use eframe::egui;

use crate::{
    api::ApiClient,
    config::{
        consts::POLL_INTERVAL_SECS,
        options::PageKind,
        state::AppState,
    },
    fetch::{self, Outcome},
    model::CrawlStatus,
};

use super::{
    components::{export_bar, nav_panel},
    pages::{Page, PageData},
    router,
};

pub fn run(native: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let api = ApiClient::from_env()?;
    eframe::run_native(
        "TeacherHub",
        native,
        Box::new(move |cc| Ok(Box::new(App::new(AppState::default(), api, cc.egui_ctx.clone())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    pub api: Arc<ApiClient>,
    ctx: egui::Context,

    // last good payload per page; replaced wholesale on refresh
    pub data: HashMap<PageKind, PageData>,
    loading: HashSet<PageKind>,
    // refreshes requested while a fetch was in flight; the in-flight fetch
    // carries a stale state snapshot, so these re-fire when it lands
    queued: HashSet<PageKind>,

    // banner for the visible page
    pub error: Option<&'static str>,

    // crawler strip
    pub crawl: Option<CrawlStatus>,
    crawl_pending: bool,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub status: Arc<Mutex<String>>,

    tx: mpsc::Sender<Outcome>,
    rx: mpsc::Receiver<Outcome>,

    last_page_poll: Instant,
    last_crawl_poll: Instant,
}

impl App {
    pub fn new(mut state: AppState, api: ApiClient, ctx: egui::Context) -> Self {
        state.options.export.set_default_dir_for_page(PageKind::Dashboard);
        let out_path_text = state.options.export.out_path().to_string_lossy().into_owned();

        let (tx, rx) = mpsc::channel();

        logf!("Init: base_url={}, default page={:?}", api.base_url(), PageKind::Dashboard);

        let mut app = Self {
            state,
            api: Arc::new(api),
            ctx,
            data: HashMap::new(),
            loading: HashSet::new(),
            queued: HashSet::new(),
            error: None,
            crawl: None,
            crawl_pending: false,
            out_path_text,
            out_path_dirty: false,
            status: Arc::new(Mutex::new(s!("연결 중..."))),
            tx,
            rx,
            last_page_poll: Instant::now(),
            last_crawl_poll: Instant::now(),
        };
        app.request_refresh(PageKind::Dashboard);
        app.poll_crawl();
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn active_kind(&self) -> PageKind {
        let kind = router::all_pages()[self.state.gui.current_page_index].kind();
        if kind == PageKind::Teachers && self.state.gui.selected_teacher.is_some() {
            PageKind::TeacherDetail
        } else {
            kind
        }
    }

    #[inline]
    pub fn active_page(&self) -> &'static dyn Page {
        router::page_for(&self.active_kind())
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    /* ---------- navigation ---------- */

    pub fn switch_page(&mut self, index: usize) {
        self.state.gui.current_page_index = index;
        self.state.gui.selected_teacher = None;
        self.error = None;
        let kind = self.active_kind();
        self.sync_export_dir(kind);
        self.request_refresh(kind);
    }

    pub fn open_teacher(&mut self, id: u64) {
        logf!("UI: Teacher detail → {}", id);
        self.state.gui.selected_teacher = Some(id);
        self.error = None;
        self.sync_export_dir(PageKind::TeacherDetail);
        self.request_refresh(PageKind::TeacherDetail);
    }

    pub fn close_teacher(&mut self) {
        self.state.gui.selected_teacher = None;
        self.error = None;
        self.sync_export_dir(PageKind::Teachers);
    }

    /// Follow the page with the default export dir unless the user typed one.
    fn sync_export_dir(&mut self, kind: PageKind) {
        if self.out_path_dirty {
            return;
        }
        self.state.options.export.set_default_dir_for_page(kind);
        self.out_path_text = self
            .state
            .options
            .export
            .out_path()
            .to_string_lossy()
            .into_owned();
    }

    /* ---------- background work ---------- */

    pub fn request_refresh(&mut self, kind: PageKind) {
        if self.loading.contains(&kind) {
            // the running fetch was spawned with an older state snapshot
            logd!("Fetch: {:?} already in flight, queueing", kind);
            self.queued.insert(kind);
            return;
        }
        self.loading.insert(kind);
        if kind == self.active_kind() {
            self.last_page_poll = Instant::now();
        }
        self.status("불러오는 중...");
        fetch::spawn_page_fetch(
            Arc::clone(&self.api),
            self.state.clone(),
            router::page_for(&kind),
            self.tx.clone(),
            self.ctx.clone(),
        );
    }

    fn poll_crawl(&mut self) {
        self.last_crawl_poll = Instant::now();
        fetch::spawn_crawl_poll(Arc::clone(&self.api), self.tx.clone(), self.ctx.clone());
    }

    pub fn trigger_crawl(&mut self) {
        if self.crawl_pending {
            return;
        }
        self.crawl_pending = true;
        logf!("Crawl: trigger requested");
        self.status("크롤링 요청 중...");
        fetch::spawn_crawl_trigger(Arc::clone(&self.api), self.tx.clone(), self.ctx.clone());
    }

    fn drain_outcomes(&mut self) {
        while let Ok(outcome) = self.rx.try_recv() {
            match outcome {
                Outcome::Page { kind, result } => {
                    self.loading.remove(&kind);
                    if self.queued.remove(&kind) {
                        // parameters changed while this fetch ran; its result
                        // is stale, drop it and go again
                        self.request_refresh(kind);
                        continue;
                    }
                    match result {
                        Ok(data) => {
                            self.data.insert(kind, data);
                            if kind == self.active_kind() {
                                self.error = None;
                            }
                            self.status("업데이트 완료");
                        }
                        Err(_) => {
                            if kind == self.active_kind() {
                                self.error = Some(router::page_for(&kind).error_message());
                            }
                            self.status("요청 실패");
                        }
                    }
                }
                Outcome::Crawl(result) => {
                    if let Ok(status) = result {
                        self.crawl = Some(status);
                    }
                }
                Outcome::CrawlTriggered(result) => {
                    self.crawl_pending = false;
                    match result {
                        Ok(()) => {
                            self.status("크롤링 시작됨");
                            self.poll_crawl();
                        }
                        Err(e) => {
                            loge!("Crawl: trigger failed: {}", e);
                            self.status("크롤링 실행 실패");
                        }
                    }
                }
            }
        }
    }

    fn tick_polls(&mut self) {
        let poll = Duration::from_secs(POLL_INTERVAL_SECS);

        let kind = self.active_kind();
        if let Some(interval) = router::page_for(&kind).poll_interval() {
            if self.last_page_poll.elapsed() >= interval && !self.loading.contains(&kind) {
                logd!("Poll: refreshing {:?}", kind);
                self.request_refresh(kind);
            }
        }

        if self.last_crawl_poll.elapsed() >= poll {
            self.poll_crawl();
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_outcomes();
        self.tick_polls();

        egui::SidePanel::left("nav")
            .resizable(false)
            .default_width(170.0)
            .show(ctx, |ui| {
                nav_panel::draw(ui, self);
            });

        egui::TopBottomPanel::bottom("export").show(ctx, |ui| {
            ui.add_space(4.0);
            export_bar::draw(ui, self);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(message) = self.error {
                egui::Frame::group(ui.style())
                    .fill(egui::Color32::from_rgb(0x40, 0x1a, 0x1a))
                    .inner_margin(8.0)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(
                            egui::RichText::new(message)
                                .color(egui::Color32::from_rgb(0xef, 0x9a, 0x9a)),
                        );
                    });
                ui.add_space(4.0);
            }

            let page = self.active_page();
            page.draw(ui, self);
        });

        // keeps the poll timers honest even when nothing repaints
        ctx.request_repaint_after(Duration::from_secs(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;

    // Backed by a listener that accepts but never answers, so spawned
    // fetches stay in flight for the whole test. Outcomes are injected
    // by hand through the channel instead.
    fn app() -> (App, std::net::TcpListener) {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let api = ApiClient::new(&base).unwrap();
        (App::new(AppState::default(), api, egui::Context::default()), listener)
    }

    fn land_stale(app: &mut App, kind: PageKind) {
        app.tx
            .send(Outcome::Page { kind, result: Err(ApiError::Worker) })
            .unwrap();
        app.drain_outcomes();
    }

    #[test]
    fn refresh_with_changed_params_refires_after_inflight_fetch() {
        let (mut app, _listener) = app();
        app.request_refresh(PageKind::DailyReports);
        assert!(app.loading.contains(&PageKind::DailyReports));

        // user flips the date while the first fetch is still out
        app.state.gui.report_date = app.state.gui.report_date.pred_opt().unwrap();
        app.request_refresh(PageKind::DailyReports);
        assert!(app.queued.contains(&PageKind::DailyReports));

        // the stale fetch lands; a fresh one must go out with the new date
        land_stale(&mut app, PageKind::DailyReports);
        assert!(app.loading.contains(&PageKind::DailyReports));
        assert!(!app.queued.contains(&PageKind::DailyReports));

        // the queue is one-shot
        land_stale(&mut app, PageKind::DailyReports);
        assert!(!app.loading.contains(&PageKind::DailyReports));
    }

    #[test]
    fn stale_result_is_dropped_when_a_refresh_is_queued() {
        use crate::gui::pages::weekly::WeeklyData;
        use crate::table::DataSet;

        let (mut app, _listener) = app();
        app.request_refresh(PageKind::WeeklyReports);
        app.state.gui.week = app.state.gui.week.prev();
        app.request_refresh(PageKind::WeeklyReports);

        // a successful fetch for the old week must not be displayed
        let stale = PageData::Weekly(WeeklyData {
            summary: Default::default(),
            table: DataSet::default(),
            trend_teacher: None,
            trend: Vec::new(),
        });
        app.tx
            .send(Outcome::Page { kind: PageKind::WeeklyReports, result: Ok(stale) })
            .unwrap();
        app.drain_outcomes();
        assert!(!app.data.contains_key(&PageKind::WeeklyReports));
        assert!(app.loading.contains(&PageKind::WeeklyReports));
    }
}
