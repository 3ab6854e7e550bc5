use serde::Deserialize;
use thiserror::Error;

use crate::message::Msg;

/// What happens after a picture has been uploaded successfully.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AfterUpload {
    /// Reload the page by navigating to the current path.
    #[default]
    NavigateAway,
    StayInPlace,
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum UploadRejection {
    #[error("a picture is already being uploaded")]
    Pending,
    #[error("no picture selected")]
    NoFileSelected,
    #[error("photo state is no longer available")]
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOutcome {
    pub notice: Msg,
    pub navigate_to: Option<String>,
}

/// Identifies a file selection; previews of older selections are dropped.
pub type Selection = u64;

#[derive(Debug, Clone, Default)]
pub struct PhotoForm {
    file_selected: bool,
    selection: Selection,
    preview: Option<String>,
    uploading: bool,
}

impl PhotoForm {
    /// A new file has been chosen; its preview follows once it is read.
    pub fn select_file(&mut self) -> Selection {
        self.file_selected = true;
        self.selection += 1;
        self.preview = None;
        self.selection
    }

    pub fn clear_selection(&mut self) {
        self.file_selected = false;
        self.selection += 1;
        self.preview = None;
    }

    /// Returns `false` if the file has been replaced in the meantime.
    pub fn show_preview(&mut self, selection: Selection, data_url: String) -> bool {
        if selection != self.selection || !self.file_selected {
            return false;
        }
        self.preview = Some(data_url);
        true
    }

    #[must_use]
    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    #[must_use]
    pub const fn is_uploading(&self) -> bool {
        self.uploading
    }

    pub fn begin_upload(&mut self) -> Result<(), UploadRejection> {
        if self.uploading {
            return Err(UploadRejection::Pending);
        }
        if !self.file_selected {
            return Err(UploadRejection::NoFileSelected);
        }
        self.uploading = true;
        Ok(())
    }

    pub fn settle(&mut self) {
        self.uploading = false;
    }
}

/// State of the photo modal.
#[derive(Debug, Clone)]
pub struct PhotoPanel {
    pub form: PhotoForm,
    after_upload: AfterUpload,
    return_path: String,
    modal_open: bool,
}

impl PhotoPanel {
    #[must_use]
    pub fn new(after_upload: AfterUpload, return_path: String) -> Self {
        Self {
            form: PhotoForm::default(),
            after_upload,
            return_path,
            modal_open: false,
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.modal_open
    }

    pub fn open(&mut self) {
        self.modal_open = true;
    }

    pub fn close(&mut self) {
        self.modal_open = false;
        if !self.form.is_uploading() {
            self.form.clear_selection();
        }
    }

    pub fn settle_uploaded(&mut self) -> UploadOutcome {
        self.form.settle();
        let navigate_to = match self.after_upload {
            AfterUpload::NavigateAway => Some(self.return_path.clone()),
            AfterUpload::StayInPlace => None,
        };
        UploadOutcome {
            notice: Msg::PictureUploaded,
            navigate_to,
        }
    }

    pub fn settle_failed(&mut self) -> UploadOutcome {
        self.form.settle();
        UploadOutcome {
            notice: Msg::UnableToUploadPicture,
            navigate_to: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_requires_selected_file() {
        let mut form = PhotoForm::default();
        assert_eq!(form.begin_upload(), Err(UploadRejection::NoFileSelected));
        assert!(!form.is_uploading());
        form.select_file();
        assert_eq!(form.begin_upload(), Ok(()));
        assert!(form.is_uploading());
    }

    #[test]
    fn no_second_upload_while_pending() {
        let mut form = PhotoForm::default();
        form.select_file();
        form.begin_upload().unwrap();
        assert_eq!(form.begin_upload(), Err(UploadRejection::Pending));
        form.settle();
        assert_eq!(form.begin_upload(), Ok(()));
    }

    #[test]
    fn new_selection_drops_old_preview() {
        let mut form = PhotoForm::default();
        let first = form.select_file();
        assert!(form.show_preview(first, "data:image/png;base64,AAAA".into()));
        assert_eq!(form.preview(), Some("data:image/png;base64,AAAA"));
        form.select_file();
        assert_eq!(form.preview(), None);
    }

    #[test]
    fn late_preview_of_replaced_file_is_ignored() {
        let mut form = PhotoForm::default();
        let first = form.select_file();
        let second = form.select_file();
        assert!(!form.show_preview(first, "data:first".into()));
        assert_eq!(form.preview(), None);
        assert!(form.show_preview(second, "data:second".into()));
        assert_eq!(form.preview(), Some("data:second"));
        form.clear_selection();
        assert!(!form.show_preview(second, "data:second".into()));
    }

    #[test]
    fn navigate_away_after_upload() {
        let mut panel = PhotoPanel::new(AfterUpload::NavigateAway, "/places/1/cafe/".into());
        panel.form.select_file();
        panel.form.begin_upload().unwrap();
        let outcome = panel.settle_uploaded();
        assert_eq!(outcome.notice, Msg::PictureUploaded);
        assert_eq!(outcome.navigate_to.as_deref(), Some("/places/1/cafe/"));
        assert!(!panel.form.is_uploading());
    }

    #[test]
    fn stay_in_place_after_upload() {
        let mut panel = PhotoPanel::new(AfterUpload::StayInPlace, "/places/1/cafe/".into());
        panel.form.select_file();
        panel.form.begin_upload().unwrap();
        let outcome = panel.settle_uploaded();
        assert_eq!(outcome.navigate_to, None);
    }

    #[test]
    fn failed_upload_never_navigates() {
        let mut panel = PhotoPanel::new(AfterUpload::NavigateAway, "/".into());
        panel.form.select_file();
        panel.form.begin_upload().unwrap();
        let outcome = panel.settle_failed();
        assert_eq!(outcome.notice, Msg::UnableToUploadPicture);
        assert_eq!(outcome.navigate_to, None);
        assert!(!panel.form.is_uploading());
    }

    #[test]
    fn close_keeps_selection_of_pending_upload() {
        let mut panel = PhotoPanel::new(AfterUpload::StayInPlace, "/".into());
        panel.open();
        panel.form.select_file();
        panel.form.begin_upload().unwrap();
        panel.close();
        assert!(panel.form.is_uploading());
        panel.form.settle();
        assert_eq!(panel.form.begin_upload(), Ok(()));
    }

    #[test]
    fn close_clears_selection() {
        let mut panel = PhotoPanel::new(AfterUpload::StayInPlace, "/".into());
        panel.open();
        let selection = panel.form.select_file();
        panel.form.show_preview(selection, "data:,".into());
        panel.close();
        assert!(!panel.is_open());
        assert_eq!(panel.form.preview(), None);
        assert_eq!(panel.form.begin_upload(), Err(UploadRejection::NoFileSelected));
    }

    #[test]
    fn after_upload_names() {
        let value: AfterUpload = serde_json::from_str(r#""stay-in-place""#).unwrap();
        assert_eq!(value, AfterUpload::StayInPlace);
        let value: AfterUpload = serde_json::from_str(r#""navigate-away""#).unwrap();
        assert_eq!(value, AfterUpload::NavigateAway);
    }
}
