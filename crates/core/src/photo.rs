//! Photo slots for the customer registration wizard.
//!
//! The wizard works against a fixed set of slot types. The parent page
//! registers the slots it needs; steps only ever fill or clear slots that
//! are already registered and never create new ones.

use crate::error::CoreError;
use crate::file::FileUpload;
use crate::wire::wire_enum;

wire_enum! {
    /// Semantic type of a required photo. The wire string doubles as the
    /// multipart field name on submit.
    PhotoType {
        /// Identity card (KTP).
        Ktp => "ktp",
        /// Customer holding their identity card.
        SelfieKtp => "selfie_ktp",
        /// Front of the house.
        RumahDepan => "rumah_depan",
        /// Side of the house.
        RumahSamping => "rumah_samping",
        /// Optical distribution point the drop cable is spliced into.
        Odp => "odp",
        /// Power meter reading showing signal attenuation.
        Redaman => "redaman",
    }
}

/// Number of slot types; the slot table is sized by this.
pub const SLOT_COUNT: usize = PhotoType::ALL.len();

impl PhotoType {
    /// Human-readable label shown next to the upload control.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ktp => "Identity card (KTP)",
            Self::SelfieKtp => "Selfie with KTP",
            Self::RumahDepan => "House, front view",
            Self::RumahSamping => "House, side view",
            Self::Odp => "ODP box",
            Self::Redaman => "Signal attenuation reading",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// State of one slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SlotState {
    /// The parent has not asked for this photo.
    #[default]
    Unregistered,
    /// Registered, waiting for a file.
    Empty,
    Filled(FileUpload),
}

impl SlotState {
    pub fn file(&self) -> Option<&FileUpload> {
        match self {
            Self::Filled(file) => Some(file),
            _ => None,
        }
    }
}

/// A request to change one slot, produced by a wizard step.
///
/// `file: None` clears the slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoUpdate {
    pub slot: PhotoType,
    pub file: Option<FileUpload>,
}

/// Fixed-size mapping from every [`PhotoType`] to its [`SlotState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoSlots {
    slots: [SlotState; SLOT_COUNT],
}

impl Default for PhotoSlots {
    fn default() -> Self {
        Self::new()
    }
}

impl PhotoSlots {
    /// A table with every slot unregistered.
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| SlotState::Unregistered),
        }
    }

    /// A table with exactly the given slots registered and empty.
    pub fn from_types(types: impl IntoIterator<Item = PhotoType>) -> Self {
        let mut slots = Self::new();
        for ty in types {
            slots.register(ty);
        }
        slots
    }

    /// Register a slot. Registering twice keeps the existing file.
    pub fn register(&mut self, ty: PhotoType) {
        let slot = &mut self.slots[ty.index()];
        if *slot == SlotState::Unregistered {
            *slot = SlotState::Empty;
        }
    }

    pub fn is_registered(&self, ty: PhotoType) -> bool {
        self.slots[ty.index()] != SlotState::Unregistered
    }

    pub fn state(&self, ty: PhotoType) -> &SlotState {
        &self.slots[ty.index()]
    }

    pub fn file(&self, ty: PhotoType) -> Option<&FileUpload> {
        self.state(ty).file()
    }

    /// Put a file into a registered slot, replacing any previous one.
    pub fn fill(&mut self, ty: PhotoType, file: FileUpload) -> Result<(), CoreError> {
        let slot = self.registered_mut(ty)?;
        *slot = SlotState::Filled(file);
        Ok(())
    }

    /// Remove the file from a registered slot.
    pub fn clear(&mut self, ty: PhotoType) -> Result<(), CoreError> {
        let slot = self.registered_mut(ty)?;
        *slot = SlotState::Empty;
        Ok(())
    }

    pub fn apply(&mut self, update: PhotoUpdate) -> Result<(), CoreError> {
        match update.file {
            Some(file) => self.fill(update.slot, file),
            None => self.clear(update.slot),
        }
    }

    /// Registered slot types, in declaration order.
    pub fn registered(&self) -> impl Iterator<Item = PhotoType> + '_ {
        PhotoType::ALL
            .iter()
            .copied()
            .filter(|ty| self.is_registered(*ty))
    }

    /// Registered slots that still have no file.
    pub fn missing(&self) -> impl Iterator<Item = PhotoType> + '_ {
        PhotoType::ALL
            .iter()
            .copied()
            .filter(|ty| self.state(*ty) == &SlotState::Empty)
    }

    /// Filled slots, in declaration order.
    pub fn attachments(&self) -> impl Iterator<Item = (PhotoType, &FileUpload)> + '_ {
        PhotoType::ALL
            .iter()
            .filter_map(|ty| self.file(*ty).map(|file| (*ty, file)))
    }

    /// `true` once every registered slot holds a file.
    pub fn is_complete(&self) -> bool {
        self.missing().next().is_none()
    }

    fn registered_mut(&mut self, ty: PhotoType) -> Result<&mut SlotState, CoreError> {
        let slot = &mut self.slots[ty.index()];
        if *slot == SlotState::Unregistered {
            return Err(CoreError::Validation(format!(
                "Photo slot '{}' is not registered",
                ty.as_str()
            )));
        }
        Ok(slot)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
