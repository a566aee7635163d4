use std::sync::mpsc::Sender;

use ratatui::widgets::ListState;

use livescroll_feed::presentation::{
    FeedPresenter, ResourceErrorView, ResourceErrorViewModel, ResourceLoadingView,
    ResourceLoadingViewModel, ResourceView,
};

use crate::cell::FeedImageCellController;
use crate::dispatch::{image_delivery, UiMsg};

/// All state the UI renders.  Updated only through the view traits and the
/// navigation methods below.
pub struct App {
    /// One controller per feed image, in feed order.
    pub cells: Vec<FeedImageCellController>,
    /// List selection state for scrolling.
    pub list_state: ListState,
    /// Whether the user has requested to quit.
    pub quit: bool,
    /// Whether a feed load is in progress.
    pub is_loading: bool,
    /// Error banner; `None` when the last load succeeded.
    pub error_message: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self {
            cells: Vec::new(),
            list_state: ListState::default(),
            quit: false,
            is_loading: false,
            error_message: None,
        }
    }

    pub fn title(&self) -> &'static str {
        FeedPresenter::title()
    }

    pub fn status(&self) -> String {
        match (&self.error_message, self.is_loading) {
            (Some(message), _) => format!("Error: {message}"),
            (None, true) => "Loading…".into(),
            (None, false) => format!("{} images", self.cells.len()),
        }
    }

    // -- images ----------------------------------------------------------------

    /// Start the selected row's image load if it has never been requested.
    pub fn request_selected_image(&mut self, tx: &Sender<UiMsg>) {
        let Some(row) = self.list_state.selected() else {
            return;
        };
        if let Some(cell) = self.cells.get_mut(row) {
            cell.request_image(image_delivery(tx, row));
        }
    }

    pub fn retry_selected_image(&mut self, tx: &Sender<UiMsg>) {
        let Some(row) = self.list_state.selected() else {
            return;
        };
        if let Some(cell) = self.cells.get_mut(row) {
            cell.retry(image_delivery(tx, row));
        }
    }

    // -- navigation ----------------------------------------------------------

    pub fn select_next(&mut self) {
        if self.cells.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1).min(self.cells.len() - 1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_previous(&mut self) {
        if self.cells.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_first(&mut self) {
        if !self.cells.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if !self.cells.is_empty() {
            self.list_state.select(Some(self.cells.len() - 1));
        }
    }
}

impl ResourceView for App {
    type ViewModel = Vec<FeedImageCellController>;

    /// Replaces every row.  Dropping the old controllers cancels their
    /// image loads.
    fn display(&mut self, cells: Vec<FeedImageCellController>) {
        self.cells = cells;
        let selected = if self.cells.is_empty() {
            None
        } else {
            Some(self.list_state.selected().unwrap_or(0).min(self.cells.len() - 1))
        };
        self.list_state.select(selected);
    }
}

impl ResourceLoadingView for App {
    fn display(&mut self, view_model: ResourceLoadingViewModel) {
        self.is_loading = view_model.is_loading;
    }
}

impl ResourceErrorView for App {
    fn display(&mut self, view_model: ResourceErrorViewModel) {
        self.error_message = view_model.message;
    }
}
