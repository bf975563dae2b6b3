use crate::shared::metadata::{
    ColumnMetadata, EntityApiMetadata, EntityListMetadata, EntityMetadataInfo, EntityUiMetadata,
    FieldKind, FieldMetadata, FieldUiMetadata, SubmitEncoding, ValidationRules,
};

pub static ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    schema_version: "1.0",
    entity_name: "Service",
    entity_index: "a006_service",
    slug: "service",
    ui: EntityUiMetadata {
        element_name: "Service",
        list_name: "Services",
        report_title: "Service Report",
        icon: "briefcase",
    },
    api: EntityApiMetadata {
        list: "getServices",
        create: "createService",
        update: "updateService",
        delete: Some("deleteService"),
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
        csv_file_name: "Services.csv",
        orderable: false,
    },
    submit: SubmitEncoding::Multipart,
};

pub static FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new(
        "title",
        FieldKind::Text,
        FieldUiMetadata::labeled("Service title", "Enter service title"),
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
        FieldUiMetadata::labeled("Service image", ""),
        ValidationRules::required(),
    ),
];
