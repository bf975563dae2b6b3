use crate::shared::metadata::{
    ColumnMetadata, EntityApiMetadata, EntityListMetadata, EntityMetadataInfo, EntityUiMetadata,
    FieldKind, FieldMetadata, FieldUiMetadata, SubmitEncoding, ValidationRules,
};

pub static ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    schema_version: "1.0",
    entity_name: "About",
    entity_index: "a004_about",
    slug: "about",
    ui: EntityUiMetadata {
        element_name: "About",
        list_name: "Abouts",
        report_title: "About Report",
        icon: "info",
    },
    api: EntityApiMetadata {
        list: "getAbouts",
        create: "createAbout",
        update: "updateAbout",
        delete: Some("deleteAbout"),
    },
    list: EntityListMetadata {
        columns: &[
            ColumnMetadata::id(),
            ColumnMetadata::image("Image", "image"),
            ColumnMetadata::text("Title", "title"),
            ColumnMetadata::text("Description", "description"),
            ColumnMetadata::status(),
        ],
        search_fields: &["id", "title", "description", "status"],
        csv_columns: &[
            ColumnMetadata::id(),
            ColumnMetadata::text("Title", "title"),
            ColumnMetadata::text("Image", "image"),
            ColumnMetadata::text("Description", "description"),
            ColumnMetadata::status(),
        ],
        csv_file_name: "Abouts.csv",
        orderable: false,
    },
    submit: SubmitEncoding::Multipart,
};

pub static FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new(
        "title",
        FieldKind::Text,
        FieldUiMetadata::labeled("Title", "Enter title"),
        ValidationRules::required(),
    ),
    FieldMetadata::new(
        "description",
        FieldKind::LongText,
        FieldUiMetadata::labeled("Description", "Enter description"),
        ValidationRules::required(),
    ),
    FieldMetadata::new(
        "image",
        FieldKind::Image,
        FieldUiMetadata::labeled("Image", ""),
        ValidationRules::required(),
    ),
];
