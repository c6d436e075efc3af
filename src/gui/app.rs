// src/gui/app.rs
use std::{
    collections::HashMap,
    error::Error,
    path::PathBuf,
    sync::{mpsc, Arc, Mutex},
    thread,
    time::Duration,
};

use eframe::egui;

use crate::{
    analysis::{self, Report},
    config::{
        options::{AppOptions, TableKind},
        state::AppState,
    },
    model::Product,
    progress::Progress,
    store::{self, DataSet},
};

use super::{
    pages::{Page, PageView},
    progress::GuiProgress,
    router,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Banggood Pipeline",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

/// A stage running off the UI thread; it reports one status line when done.
type JobResult = Result<String, String>;

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // tables as last read from disk
    pub tables: HashMap<TableKind, DataSet>,
    pub products: Vec<Product>,
    /// One per analysis, in `AnalysisKind::ALL` order; empty without products
    pub reports: Vec<Report>,

    // status/progress (workers write here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    job: Option<mpsc::Receiver<JobResult>>,

    /// Where the chart was painted last frame (screen points)
    pub chart_rect: Option<egui::Rect>,
    /// PNG target while a screenshot is in flight
    pub snapshot_to: Option<PathBuf>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into();
        let mut app = Self {
            state,
            out_path_text,
            out_path_dirty: false,
            tables: HashMap::new(),
            products: Vec::new(),
            reports: Vec::new(),
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            job: None,
            chart_rect: None,
            snapshot_to: None,
        };
        app.reload();
        logf!("Init: tables={}, products={}", app.tables.len(), app.products.len());
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::all_pages()[self.current_index()] }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn table(&self, kind: TableKind) -> Option<&DataSet> {
        self.tables.get(&kind)
    }

    pub fn report(&self, kind: analysis::AnalysisKind) -> Option<&Report> {
        self.reports.iter().find(|r| r.kind == kind)
    }

    /// Re-read both tables from disk and recompute the reports.
    pub fn reload(&mut self) {
        let paths = &self.state.options.paths;
        for kind in [TableKind::Raw, TableKind::Products] {
            match store::load(paths.for_table(kind)) {
                Ok(ds) => {
                    logf!("Cache: Loaded {:?} (rows={}, headers={})", kind, ds.row_count(), ds.header_count());
                    self.tables.insert(kind, ds);
                }
                Err(e) => {
                    logd!("Cache: Missing {:?} ({})", kind, e);
                    self.tables.remove(&kind);
                }
            }
        }

        self.products = match self.tables.get(&TableKind::Products).map(Product::from_dataset) {
            Some(Ok(ps)) => ps,
            Some(Err(e)) => {
                loge!("Cache: Products table unreadable: {e}");
                self.status(format!("Products table unreadable: {e}"));
                Vec::new()
            }
            None => Vec::new(),
        };
        self.reports = if self.products.is_empty() {
            Vec::new()
        } else {
            analysis::run_all(&self.products, self.state.options.analysis.top_n)
        };
    }

    /// Mirror the output text field into ExportOptions if the user typed.
    pub fn apply_out_path(&mut self) {
        if self.out_path_dirty {
            self.state.options.export.set_path(&self.out_path_text);
            logf!("Export: Out path set → {}", self.state.options.export.out_path().display());
            self.out_path_dirty = false;
        }
    }

    /// Run a stage on a worker thread. One job at a time.
    pub fn spawn_job<F>(&mut self, label: &'static str, job: F)
    where
        F: FnOnce(&AppOptions, &mut dyn Progress) -> Result<String, Box<dyn Error>> + Send + 'static,
    {
        if self.running {
            return;
        }
        let options = self.state.options.clone();
        let status = Arc::clone(&self.status);
        let (tx, rx) = mpsc::channel::<JobResult>();

        self.status(format!("{label}…"));
        logf!("Job: {label} begin");
        thread::spawn(move || {
            let mut prog = GuiProgress::new(status);
            // Box<dyn Error> is not Send; ship the message
            let res = job(&options, &mut prog).map_err(|e| e.to_string());
            let _ = tx.send(res);
        });
        self.running = true;
        self.job = Some(rx);
    }

    fn poll_job(&mut self) {
        let Some(rx) = &self.job else { return };
        let res = match rx.try_recv() {
            Ok(res) => res,
            Err(mpsc::TryRecvError::Empty) => return,
            Err(mpsc::TryRecvError::Disconnected) => Err(s!("Worker stopped unexpectedly")),
        };
        self.job = None;
        self.running = false;
        self.reload();
        match res {
            Ok(msg) => {
                logf!("Job: done: {msg}");
                self.status(msg);
            }
            Err(e) => {
                loge!("Job: failed: {e}");
                self.status(format!("Error: {e}"));
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_job();
        if self.running {
            ctx.request_repaint_after(Duration::from_millis(150));
        }
        super::actions::snapshot::collect(self, ctx);

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            super::components::tabs::draw(ui, self);
            ui.separator();
            super::components::action_bar::draw(ui, self);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let page = self.current_page();
            if !matches!(page.view(), PageView::Analysis(_)) {
                self.chart_rect = None;
            }
            page.draw(ui, self);
        });
    }
}
