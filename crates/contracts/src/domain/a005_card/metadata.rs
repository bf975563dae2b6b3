use crate::shared::metadata::{
    ColumnMetadata, EntityApiMetadata, EntityListMetadata, EntityMetadataInfo, EntityUiMetadata,
    FieldKind, FieldMetadata, FieldUiMetadata, SubmitEncoding, ValidationRules,
};

pub static ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    schema_version: "1.0",
    entity_name: "Card",
    entity_index: "a005_card",
    slug: "card",
    ui: EntityUiMetadata {
        element_name: "Card",
        list_name: "Cards",
        report_title: "Card Report",
        icon: "credit-card",
    },
    api: EntityApiMetadata {
        list: "getCards",
        create: "createCard",
        update: "updateCard",
        delete: Some("deleteCard"),
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
        csv_file_name: "Cards.csv",
        orderable: false,
    },
    submit: SubmitEncoding::Multipart,
};

pub static FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new(
        "title",
        FieldKind::Text,
        FieldUiMetadata::labeled("Card title", "Enter card title"),
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
        FieldUiMetadata::labeled("Card image", ""),
        ValidationRules::required(),
    ),
];
