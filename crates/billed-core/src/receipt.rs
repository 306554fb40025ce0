use crate::error::UploadError;

/// Alert shown when the picked receipt has an unsupported extension.
pub const WRONG_EXTENSION_ALERT: &str =
    "Seulement les fichiers '.jpg', '.jpeg' ou '.png' sont autorisés dans les notes de frais.";

/// Alert shown when a bill is submitted without an accepted receipt.
pub const MISSING_RECEIPT_ALERT: &str =
    "Vous devez ajouter un fichier justificatif au bon format (.jpg, .jpeg ou .png).";

/// Image formats accepted as receipts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptKind {
    Jpg,
    Jpeg,
    Png,
}

impl ReceiptKind {
    #[must_use]
    pub fn mime_type(self) -> &'static str {
        match self {
            ReceiptKind::Jpg | ReceiptKind::Jpeg => "image/jpeg",
            ReceiptKind::Png => "image/png",
        }
    }
}

/// Checks a receipt file name by the text after its last `.`, ignoring case.
///
/// # Errors
///
/// Returns [`UploadError::UnsupportedExtension`] for anything other than
/// `jpg`, `jpeg` or `png`, including names without an extension.
pub fn check_receipt_file_name(file_name: &str) -> Result<ReceiptKind, UploadError> {
    let lower = file_name.to_lowercase();
    let extension = lower.rsplit_once('.').map_or("", |(_, ext)| ext);

    match extension {
        "jpg" => Ok(ReceiptKind::Jpg),
        "jpeg" => Ok(ReceiptKind::Jpeg),
        "png" => Ok(ReceiptKind::Png),
        _ => Err(UploadError::UnsupportedExtension {
            file_name: file_name.to_string(),
            extension: extension.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_image_extensions_in_any_case() {
        assert_eq!(check_receipt_file_name("test.png"), Ok(ReceiptKind::Png));
        assert_eq!(check_receipt_file_name("scan.JPG"), Ok(ReceiptKind::Jpg));
        assert_eq!(check_receipt_file_name("a.b.JpEg"), Ok(ReceiptKind::Jpeg));
    }

    #[test]
    fn rejects_other_extensions() {
        assert_eq!(
            check_receipt_file_name("test.txt"),
            Err(UploadError::UnsupportedExtension {
                file_name: "test.txt".to_string(),
                extension: "txt".to_string(),
            })
        );
        assert!(check_receipt_file_name("photo.png.pdf").is_err());
        assert!(check_receipt_file_name("invoice.gif").is_err());
    }

    #[test]
    fn rejects_names_without_extension() {
        let err = check_receipt_file_name("png").unwrap_err();
        assert_eq!(
            err,
            UploadError::UnsupportedExtension {
                file_name: "png".to_string(),
                extension: String::new(),
            }
        );
        assert!(check_receipt_file_name("").is_err());
    }

    #[test]
    fn mime_types() {
        assert_eq!(ReceiptKind::Jpg.mime_type(), "image/jpeg");
        assert_eq!(ReceiptKind::Png.mime_type(), "image/png");
    }
}
