use crate::shared::metadata::{
    ColumnMetadata, EntityApiMetadata, EntityListMetadata, EntityMetadataInfo, EntityUiMetadata,
    FieldKind, FieldMetadata, FieldUiMetadata, SubmitEncoding, ValidationRules,
};

pub static ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    schema_version: "1.0",
    entity_name: "Price",
    entity_index: "a010_price",
    slug: "price",
    ui: EntityUiMetadata {
        element_name: "Price Plan",
        list_name: "Price Plans",
        report_title: "Price Plans",
        icon: "dollar-sign",
    },
    api: EntityApiMetadata {
        list: "getPrices",
        create: "createPrice",
        update: "updatePrice",
        delete: Some("deletePrice"),
    },
    list: EntityListMetadata {
        columns: &[
            ColumnMetadata::id(),
            ColumnMetadata::text("Title", "title"),
            ColumnMetadata::text("Plan Price", "planPrice"),
            ColumnMetadata::new("Descriptions", "description", FieldKind::NumberedText { count: 15 }),
            ColumnMetadata::status(),
        ],
        search_fields: &["id", "title", "planPrice", "status"],
        csv_columns: &[
            ColumnMetadata::id(),
            ColumnMetadata::text("Title", "title"),
            ColumnMetadata::text("Plan Price", "planPrice"),
            ColumnMetadata::new("Description", "description", FieldKind::NumberedText { count: 15 }),
            ColumnMetadata::status(),
        ],
        csv_file_name: "Prices.csv",
        orderable: false,
    },
    submit: SubmitEncoding::Json,
};

const PRICE_RULES: ValidationRules = ValidationRules {
    min: Some(0.0),
    ..ValidationRules::required()
};

pub static FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new(
        "title",
        FieldKind::Text,
        FieldUiMetadata::labeled("Title", "Enter plan title"),
        ValidationRules::required(),
    ),
    FieldMetadata::new(
        "planPrice",
        FieldKind::Number,
        FieldUiMetadata::labeled("Price", "Enter price"),
        PRICE_RULES,
    ),
    FieldMetadata::new(
        "description",
        FieldKind::NumberedText { count: 15 },
        FieldUiMetadata::labeled("Description", "Feature line"),
        ValidationRules::none(),
    ),
];
