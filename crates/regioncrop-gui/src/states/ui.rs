use crate::messages::Task;

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    /// Thumbnails known from uploads this session, in upload order.
    pub thumbnails: Vec<String>,
    pub selected_thumbnail: Option<String>,

    /// Id of the newest thumbnail request. Older loads are ignored.
    pub image_request: u64,

    /// Task the worker is running (None = idle).
    pub running: Option<Task>,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    /// Record thumbnails from an upload, keeping the list free of duplicates.
    pub fn add_thumbnails(&mut self, names: Vec<String>) {
        for name in names {
            if !self.thumbnails.contains(&name) {
                self.thumbnails.push(name);
            }
        }
    }

    /// Forget every thumbnail. A load still in flight will be ignored.
    pub fn clear_thumbnails(&mut self) {
        self.thumbnails.clear();
        self.selected_thumbnail = None;
        self.image_request += 1;
    }
}
