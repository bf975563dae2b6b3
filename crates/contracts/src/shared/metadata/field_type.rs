//! Field kind enumeration for metadata system

/// How a field is stored on the wire, rendered in tables and edited in forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    /// Server-assigned integer identifier
    Id,
    #[default]
    Text,
    /// Multi-line text (textarea)
    LongText,
    Number,
    /// `YYYY-MM-DD` in forms; the server may answer with a full timestamp
    Date,
    Email,
    Phone,
    /// Single uploaded image, stored as a path relative to the API base URL
    Image,
    /// Ordered list of uploaded images
    ImageList {
        /// Multipart part name used for every newly chosen file
        upload_part: &'static str,
        /// Multipart part carrying the JSON array of kept server paths
        keep_part: &'static str,
    },
    /// Ordered list of links, submitted as one comma-joined string
    LinkList,
    /// Repeated text fields `<name>1` .. `<name>N`
    NumberedText { count: u8 },
    /// Lifecycle status (`active` / `inactive` / `terminated`)
    Status,
    /// Manual sort position (`pinOrder`)
    Order,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Text => "text",
            Self::LongText => "long_text",
            Self::Number => "number",
            Self::Date => "date",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Image => "image",
            Self::ImageList { .. } => "image_list",
            Self::LinkList => "link_list",
            Self::NumberedText { .. } => "numbered_text",
            Self::Status => "status",
            Self::Order => "order",
        }
    }

    /// Fields carrying uploaded files
    pub fn is_media(&self) -> bool {
        matches!(self, Self::Image | Self::ImageList { .. })
    }

    /// HTML input type used by the form widget
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Number | Self::Id | Self::Order => "number",
            Self::Date => "date",
            Self::Email => "email",
            Self::Phone => "tel",
            Self::Image | Self::ImageList { .. } => "file",
            _ => "text",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_kinds() {
        assert!(FieldKind::Image.is_media());
        assert!(FieldKind::ImageList {
            upload_part: "image",
            keep_part: "existingImages"
        }
        .is_media());
        assert!(!FieldKind::LinkList.is_media());
        assert!(!FieldKind::Text.is_media());
    }

    #[test]
    fn test_input_types() {
        assert_eq!(FieldKind::Date.input_type(), "date");
        assert_eq!(FieldKind::Number.input_type(), "number");
        assert_eq!(FieldKind::Phone.input_type(), "tel");
        assert_eq!(FieldKind::LongText.input_type(), "text");
    }
}
