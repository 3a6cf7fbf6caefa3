use core::fmt;

use crate::{AbiStruct, CatalogEntry, Packing};

/// One difference between the default layout of a struct and a packed variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutMismatch {
    Size {
        structure: &'static str,
        packing: Packing,
        expected: usize,
        got: usize,
    },
    Offset {
        structure: &'static str,
        field: &'static str,
        packing: Packing,
        expected: usize,
        /// `None` when the packed variant does not declare the field.
        got: Option<usize>,
    },
}

impl LayoutMismatch {
    pub fn structure(&self) -> &'static str {
        match self {
            Self::Size { structure, .. } | Self::Offset { structure, .. } => structure,
        }
    }

    pub fn packing(&self) -> Packing {
        match self {
            Self::Size { packing, .. } | Self::Offset { packing, .. } => *packing,
        }
    }

    /// Offending field, `None` for a size mismatch.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Size { .. } => None,
            Self::Offset { field, .. } => Some(field),
        }
    }

    pub fn is_offset(&self) -> bool {
        matches!(self, Self::Offset { .. })
    }
}

impl fmt::Display for LayoutMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Size {
                structure,
                packing,
                expected,
                got,
            } => write!(
                f,
                "{structure} has incorrect size with {packing}, expected {expected}, got {got}"
            ),
            Self::Offset {
                structure,
                field,
                packing,
                expected,
                got: Some(got),
            } => write!(
                f,
                "{structure}.{field} has incorrect offset with {packing}, expected {expected}, got {got}"
            ),
            Self::Offset {
                structure,
                field,
                packing,
                expected,
                got: None,
            } => write!(
                f,
                "{structure}.{field} has incorrect offset with {packing}, expected {expected}, got missing"
            ),
        }
    }
}

impl core::error::Error for LayoutMismatch {}

/// Accumulates layout mismatches over any number of structs.
#[derive(Debug, Default)]
pub struct LayoutValidator {
    structs_checked: usize,
    fields_checked: usize,
    mismatches: Vec<LayoutMismatch>,
}

impl LayoutValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks `T` and returns true when all its variants agree.
    pub fn check<T: AbiStruct>(&mut self) -> bool {
        self.check_entry(&CatalogEntry::of::<T>())
    }

    /// Compares the size of the default variant with each packed variant, then the
    /// offset of every field in declaration order.
    pub fn check_entry(&mut self, entry: &CatalogEntry) -> bool {
        let name = entry.name();
        let reference = entry.layout(Packing::Default);
        let variants = Packing::FORCED.map(|packing| (packing, entry.layout(packing)));
        let before = self.mismatches.len();

        debug!(
            structure = name,
            size = reference.size(),
            fields = reference.fields().len(),
            "Checking layout"
        );

        for (packing, variant) in &variants {
            if variant.size() != reference.size() {
                self.record(LayoutMismatch::Size {
                    structure: name,
                    packing: *packing,
                    expected: reference.size(),
                    got: variant.size(),
                });
            }
        }

        for field in reference.fields() {
            self.fields_checked += 1;

            for (packing, variant) in &variants {
                let got = variant.field(field.name()).map(|field| field.offset());

                if got != Some(field.offset()) {
                    self.record(LayoutMismatch::Offset {
                        structure: name,
                        field: field.name(),
                        packing: *packing,
                        expected: field.offset(),
                        got,
                    });
                }
            }
        }

        self.structs_checked += 1;

        self.mismatches.len() == before
    }

    pub fn check_all(&mut self, entries: impl IntoIterator<Item = CatalogEntry>) -> bool {
        entries
            .into_iter()
            .fold(true, |conformant, entry| self.check_entry(&entry) && conformant)
    }

    pub fn is_conformant(&self) -> bool {
        self.mismatches.is_empty()
    }

    pub fn finish(self) -> LayoutReport {
        let report = LayoutReport {
            structs_checked: self.structs_checked,
            fields_checked: self.fields_checked,
            mismatches: self.mismatches,
        };

        if report.is_conformant() {
            info!(
                structs = report.structs_checked,
                fields = report.fields_checked,
                "Layouts are identical under every packing"
            );
        } else {
            info!(
                structs = report.structs_checked,
                fields = report.fields_checked,
                mismatches = report.mismatches.len(),
                "Layout mismatches found"
            );
        }

        report
    }

    fn record(&mut self, mismatch: LayoutMismatch) {
        error!("{mismatch}");
        self.mismatches.push(mismatch);
    }
}

/// Outcome of a validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutReport {
    structs_checked: usize,
    fields_checked: usize,
    mismatches: Vec<LayoutMismatch>,
}

impl LayoutReport {
    pub fn is_conformant(&self) -> bool {
        self.mismatches.is_empty()
    }

    pub fn structs_checked(&self) -> usize {
        self.structs_checked
    }

    pub fn fields_checked(&self) -> usize {
        self.fields_checked
    }

    pub fn mismatches(&self) -> &[LayoutMismatch] {
        &self.mismatches
    }

    /// Diagnostic lines, one per mismatch, in detection order.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.mismatches.iter().map(LayoutMismatch::to_string)
    }

    pub fn into_result(self) -> Result<Self, NonConformant> {
        if self.is_conformant() {
            Ok(self)
        } else {
            Err(NonConformant { report: self })
        }
    }
}

impl fmt::Display for LayoutReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} structs, {} fields checked, {} mismatches",
            self.structs_checked,
            self.fields_checked,
            self.mismatches.len()
        )
    }
}

/// Error returned when at least one struct changes shape under a forced packing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonConformant {
    report: LayoutReport,
}

impl NonConformant {
    pub fn report(&self) -> &LayoutReport {
        &self.report
    }

    pub fn into_report(self) -> LayoutReport {
        self.report
    }
}

impl fmt::Display for NonConformant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "struct layouts differ between packings ({})", self.report)
    }
}

impl core::error::Error for NonConformant {}
