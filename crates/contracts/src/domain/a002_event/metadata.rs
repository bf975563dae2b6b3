use crate::shared::metadata::{
    ColumnMetadata, EntityApiMetadata, EntityListMetadata, EntityMetadataInfo, EntityUiMetadata,
    FieldKind, FieldMetadata, FieldUiMetadata, SubmitEncoding, ValidationRules,
};

pub static ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    schema_version: "1.0",
    entity_name: "Event",
    entity_index: "a002_event",
    slug: "event",
    ui: EntityUiMetadata {
        element_name: "Event",
        list_name: "Events",
        report_title: "Event Report",
        icon: "calendar",
    },
    api: EntityApiMetadata {
        list: "getEvents",
        create: "createEvent",
        update: "updateEvent",
        delete: Some("deleteEvent"),
    },
    list: EntityListMetadata {
        columns: &[
            ColumnMetadata::id(),
            ColumnMetadata::image("Image", "image"),
            ColumnMetadata::text("Name", "name"),
            ColumnMetadata::text("Description", "description"),
            ColumnMetadata::status(),
            ColumnMetadata::text("CategoryId", "categoryId"),
        ],
        search_fields: &["id", "name", "description", "status", "categoryId"],
        csv_columns: &[
            ColumnMetadata::id(),
            ColumnMetadata::text("Image", "image"),
            ColumnMetadata::text("Name", "name"),
            ColumnMetadata::text("Description", "description"),
            ColumnMetadata::status(),
            ColumnMetadata::text("CategoryId", "categoryId"),
        ],
        csv_file_name: "Events.csv",
        orderable: false,
    },
    submit: SubmitEncoding::Multipart,
};

pub static FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new(
        "name",
        FieldKind::Text,
        FieldUiMetadata::labeled("Event name", "Enter event name"),
        ValidationRules::required(),
    ),
    FieldMetadata::new(
        "description",
        FieldKind::LongText,
        FieldUiMetadata::labeled("Description", "Enter description"),
        ValidationRules::required(),
    ),
    FieldMetadata::new(
        "categoryId",
        FieldKind::Number,
        FieldUiMetadata::labeled("Category ID", "Enter category id"),
        ValidationRules::required(),
    ),
    FieldMetadata::new(
        "image",
        FieldKind::Image,
        FieldUiMetadata::labeled("Event image", ""),
        ValidationRules::required(),
    ),
];
