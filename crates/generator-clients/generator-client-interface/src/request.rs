use std::fmt;
use std::path::Path;
use std::str::FromStr;

use bytes::Bytes;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];
const CSV_EXTENSIONS: &[&str] = &["csv"];
const ZIP_EXTENSIONS: &[&str] = &["zip"];

/// A named binary input, as picked by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    file_name: String,
    bytes: Bytes,
}

impl Asset {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self { file_name: file_name.into(), bytes: bytes.into() }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    fn has_extension(&self, allowed: &[&str]) -> bool {
        Path::new(&self.file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| allowed.iter().any(|allowed| ext.eq_ignore_ascii_case(allowed)))
            .unwrap_or(false)
    }
}

/// A `#rrggbb` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor([u8; 3]);

impl FromStr for HexColor {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').ok_or(())?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(());
        }
        let mut rgb = [0u8; 3];
        for (i, channel) in rgb.iter_mut().enumerate() {
            *channel = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16).map_err(|_| ())?;
        }
        Ok(HexColor(rgb))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

/// Text color overrides shared by single and bulk jobs. `None` leaves the
/// service default in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextColors {
    pub name: Option<HexColor>,
    pub quote: Option<HexColor>,
}

impl TextColors {
    fn parse(name: Option<&str>, quote: Option<&str>) -> Result<Self, ValidationError> {
        let name = name.map(|raw| raw.parse().map_err(|_| ValidationError::InvalidColor(ColorField::Name))).transpose()?;
        let quote =
            quote.map(|raw| raw.parse().map_err(|_| ValidationError::InvalidColor(ColorField::Quote))).transpose()?;
        Ok(Self { name, quote })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum AssetField {
    #[strum(serialize = "logo")]
    Logo,
    #[strum(serialize = "photo")]
    Photo,
    #[strum(serialize = "CSV")]
    Csv,
    #[strum(serialize = "ZIP")]
    PhotosZip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum ColorField {
    #[strum(serialize = "name")]
    Name,
    #[strum(serialize = "quote")]
    Quote,
}

/// Raised before anything is sent. The display text is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please select a logo file.")]
    MissingLogo,
    #[error("Please enter a name.")]
    BlankName,
    #[error("Please select a CSV file.")]
    MissingCsv,
    #[error("Please select a ZIP file containing photos.")]
    MissingPhotosZip,
    #[error("Invalid {0} file type")]
    InvalidFileType(AssetField),
    #[error("Invalid {0} color")]
    InvalidColor(ColorField),
}

fn check_file_type(asset: &Asset, field: AssetField, allowed: &[&str]) -> Result<(), ValidationError> {
    if asset.has_extension(allowed) {
        Ok(())
    } else {
        Err(ValidationError::InvalidFileType(field))
    }
}

/// Unvalidated single-job inputs, as collected from the user.
#[derive(Debug, Clone, Default)]
pub struct SingleJobDraft {
    pub logo: Option<Asset>,
    pub name: String,
    pub quote: Option<String>,
    pub photo: Option<Asset>,
    pub name_color: Option<String>,
    pub quote_color: Option<String>,
}

/// One document worth of inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleJobRequest {
    logo: Asset,
    name: String,
    quote: String,
    photo: Option<Asset>,
    colors: TextColors,
}

impl SingleJobRequest {
    pub fn logo(&self) -> &Asset {
        &self.logo
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quote(&self) -> &str {
        &self.quote
    }

    pub fn photo(&self) -> Option<&Asset> {
        self.photo.as_ref()
    }

    pub fn colors(&self) -> TextColors {
        self.colors
    }

    /// File name the rendered document is saved under: the name with every
    /// space replaced by an underscore.
    pub fn artifact_file_name(&self) -> String {
        format!("{}.pdf", self.name.replace(' ', "_"))
    }
}

impl TryFrom<SingleJobDraft> for SingleJobRequest {
    type Error = ValidationError;

    fn try_from(draft: SingleJobDraft) -> Result<Self, Self::Error> {
        let logo = draft.logo.ok_or(ValidationError::MissingLogo)?;
        if draft.name.trim().is_empty() {
            return Err(ValidationError::BlankName);
        }
        check_file_type(&logo, AssetField::Logo, IMAGE_EXTENSIONS)?;
        if let Some(photo) = &draft.photo {
            check_file_type(photo, AssetField::Photo, IMAGE_EXTENSIONS)?;
        }
        let colors = TextColors::parse(draft.name_color.as_deref(), draft.quote_color.as_deref())?;

        Ok(Self { logo, name: draft.name, quote: draft.quote.unwrap_or_default(), photo: draft.photo, colors })
    }
}

/// Unvalidated bulk-job inputs, as collected from the user.
#[derive(Debug, Clone, Default)]
pub struct BulkJobDraft {
    pub logo: Option<Asset>,
    pub records_csv: Option<Asset>,
    pub photos_zip: Option<Asset>,
    pub name_color: Option<String>,
    pub quote_color: Option<String>,
}

/// Inputs for a batch of documents: one per CSV record, photos matched by name
/// inside the ZIP archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkJobRequest {
    logo: Asset,
    records_csv: Asset,
    photos_zip: Asset,
    colors: TextColors,
}

impl BulkJobRequest {
    pub fn logo(&self) -> &Asset {
        &self.logo
    }

    pub fn records_csv(&self) -> &Asset {
        &self.records_csv
    }

    pub fn photos_zip(&self) -> &Asset {
        &self.photos_zip
    }

    pub fn colors(&self) -> TextColors {
        self.colors
    }
}

impl TryFrom<BulkJobDraft> for BulkJobRequest {
    type Error = ValidationError;

    fn try_from(draft: BulkJobDraft) -> Result<Self, Self::Error> {
        let logo = draft.logo.ok_or(ValidationError::MissingLogo)?;
        let records_csv = draft.records_csv.ok_or(ValidationError::MissingCsv)?;
        let photos_zip = draft.photos_zip.ok_or(ValidationError::MissingPhotosZip)?;

        check_file_type(&logo, AssetField::Logo, IMAGE_EXTENSIONS)?;
        check_file_type(&records_csv, AssetField::Csv, CSV_EXTENSIONS)?;
        check_file_type(&photos_zip, AssetField::PhotosZip, ZIP_EXTENSIONS)?;
        let colors = TextColors::parse(draft.name_color.as_deref(), draft.quote_color.as_deref())?;

        Ok(Self { logo, records_csv, photos_zip, colors })
    }
}
