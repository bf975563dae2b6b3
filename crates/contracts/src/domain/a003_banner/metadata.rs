use crate::shared::metadata::{
    ColumnMetadata, EntityApiMetadata, EntityListMetadata, EntityMetadataInfo, EntityUiMetadata,
    FieldKind, FieldMetadata, FieldUiMetadata, SubmitEncoding, ValidationRules,
};

pub static ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    schema_version: "1.0",
    entity_name: "Banner",
    entity_index: "a003_banner",
    slug: "banner",
    ui: EntityUiMetadata {
        element_name: "Banner",
        list_name: "Banners",
        report_title: "Banner Report",
        icon: "image",
    },
    api: EntityApiMetadata {
        list: "getBanners",
        create: "createBanner",
        update: "updateBanner",
        delete: Some("deleteBanner"),
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
        csv_file_name: "Banners.csv",
        orderable: false,
    },
    submit: SubmitEncoding::Multipart,
};

pub static FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new(
        "title",
        FieldKind::Text,
        FieldUiMetadata::labeled("Title", "Enter banner title"),
        ValidationRules::none(),
    ),
    FieldMetadata::new(
        "description",
        FieldKind::LongText,
        FieldUiMetadata::labeled("Description", "Enter description"),
        ValidationRules::none(),
    ),
    FieldMetadata::new(
        "image",
        FieldKind::Image,
        FieldUiMetadata::labeled("Banner image", ""),
        ValidationRules::required(),
    ),
];
