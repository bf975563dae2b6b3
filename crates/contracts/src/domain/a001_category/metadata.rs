use crate::shared::metadata::{
    ColumnMetadata, EntityApiMetadata, EntityListMetadata, EntityMetadataInfo, EntityUiMetadata,
    FieldKind, FieldMetadata, FieldUiMetadata, SubmitEncoding, ValidationRules,
};

pub static ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    schema_version: "1.0",
    entity_name: "Category",
    entity_index: "a001_category",
    slug: "category",
    ui: EntityUiMetadata {
        element_name: "Category",
        list_name: "Categories",
        report_title: "Category Report",
        icon: "folder",
    },
    api: EntityApiMetadata {
        list: "getCategories",
        create: "createCategory",
        update: "updateCategory",
        delete: Some("deleteCategory"),
    },
    list: EntityListMetadata {
        columns: &[
            ColumnMetadata::id(),
            ColumnMetadata::image("Image", "image"),
            ColumnMetadata::text("Name", "name"),
            ColumnMetadata::status(),
        ],
        search_fields: &["id", "name", "status"],
        csv_columns: &[
            ColumnMetadata::id(),
            ColumnMetadata::text("Name", "name"),
            ColumnMetadata::text("Image", "image"),
            ColumnMetadata::status(),
        ],
        csv_file_name: "Categories.csv",
        orderable: false,
    },
    submit: SubmitEncoding::Multipart,
};

pub static FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new(
        "name",
        FieldKind::Text,
        FieldUiMetadata::labeled("Category name", "Enter category name"),
        ValidationRules::required(),
    ),
    FieldMetadata::new(
        "image",
        FieldKind::Image,
        FieldUiMetadata::labeled("Category image", ""),
        ValidationRules::required(),
    ),
];
