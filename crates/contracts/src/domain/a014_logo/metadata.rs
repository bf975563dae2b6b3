use crate::shared::metadata::{
    ColumnMetadata, EntityApiMetadata, EntityListMetadata, EntityMetadataInfo, EntityUiMetadata,
    FieldKind, FieldMetadata, FieldUiMetadata, SubmitEncoding, ValidationRules,
};

pub static ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    schema_version: "1.0",
    entity_name: "Logo",
    entity_index: "a014_logo",
    slug: "logo",
    ui: EntityUiMetadata {
        element_name: "Logo",
        list_name: "Logos",
        report_title: "Logo Report",
        icon: "award",
    },
    api: EntityApiMetadata {
        list: "getLogos",
        create: "createLogo",
        update: "updateLogo",
        delete: Some("deleteLogo"),
    },
    list: EntityListMetadata {
        columns: &[
            ColumnMetadata::id(),
            ColumnMetadata::image("Image", "image"),
            ColumnMetadata::text("Title", "title"),
            ColumnMetadata::status(),
        ],
        search_fields: &["id", "title", "status"],
        csv_columns: &[
            ColumnMetadata::id(),
            ColumnMetadata::text("Image", "image"),
            ColumnMetadata::text("Title", "title"),
            ColumnMetadata::status(),
        ],
        csv_file_name: "Logos.csv",
        orderable: false,
    },
    submit: SubmitEncoding::Multipart,
};

pub static FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new(
        "title",
        FieldKind::Text,
        FieldUiMetadata::labeled("Title", "Enter logo title"),
        ValidationRules::none(),
    ),
    FieldMetadata::new(
        "image",
        FieldKind::Image,
        FieldUiMetadata::labeled("Logo image", ""),
        ValidationRules::required(),
    ),
];
