//! Step view models for the photo-upload wizard.
//!
//! Each step is a pure function of `(loading, slots)`. A step renders only
//! when every slot it asks for is already registered in the incoming
//! [`PhotoSlots`]; otherwise it renders nothing. File selections flow back
//! to the parent as [`PhotoUpdate`]s.

use crate::file::FileUpload;
use crate::photo::{PhotoSlots, PhotoType, PhotoUpdate};

/// `accept` attribute for every photo control.
pub const IMAGE_ACCEPT: &str = "image/*";

/// The three wizard steps, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhotoStep {
    Identity,
    House,
    Installation,
}

impl PhotoStep {
    pub const ALL: [PhotoStep; 3] = [Self::Identity, Self::House, Self::Installation];

    /// Slots this step collects.
    pub fn slots(self) -> &'static [PhotoType] {
        match self {
            Self::Identity => &[PhotoType::Ktp, PhotoType::SelfieKtp],
            Self::House => &[PhotoType::RumahDepan, PhotoType::RumahSamping],
            Self::Installation => &[PhotoType::Odp, PhotoType::Redaman],
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Identity => "Identity documents",
            Self::House => "House photos",
            Self::Installation => "Installation photos",
        }
    }
}

/// One file input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadControl {
    pub slot: PhotoType,
    pub label: &'static str,
    pub accept: &'static str,
    /// Controls are locked while the parent is submitting.
    pub disabled: bool,
    /// Name of the file currently in the slot, if any.
    pub file_name: Option<String>,
}

/// What a step renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepView {
    pub step: PhotoStep,
    pub title: &'static str,
    pub controls: Vec<UploadControl>,
}

impl StepView {
    /// `true` once every control shows a file.
    pub fn is_complete(&self) -> bool {
        self.controls.iter().all(|c| c.file_name.is_some())
    }

    /// Turn a user's file pick into an update for the parent.
    ///
    /// Returns `None` when the slot is not one of this step's controls or the
    /// control is disabled.
    pub fn select(&self, slot: PhotoType, file: Option<FileUpload>) -> Option<PhotoUpdate> {
        self.controls
            .iter()
            .find(|c| c.slot == slot && !c.disabled)
            .map(|_| PhotoUpdate { slot, file })
    }
}

/// Render one step, or nothing if any of its slots is unregistered.
pub fn render_step(step: PhotoStep, loading: bool, slots: &PhotoSlots) -> Option<StepView> {
    if !step.slots().iter().all(|ty| slots.is_registered(*ty)) {
        return None;
    }

    let controls = step
        .slots()
        .iter()
        .map(|ty| UploadControl {
            slot: *ty,
            label: ty.label(),
            accept: IMAGE_ACCEPT,
            disabled: loading,
            file_name: slots.file(*ty).map(|f| f.file_name.clone()),
        })
        .collect();

    Some(StepView {
        step,
        title: step.title(),
        controls,
    })
}

/// Render every step that has its slots registered, in display order.
pub fn render_wizard(loading: bool, slots: &PhotoSlots) -> Vec<StepView> {
    PhotoStep::ALL
        .iter()
        .filter_map(|step| render_step(*step, loading, slots))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
