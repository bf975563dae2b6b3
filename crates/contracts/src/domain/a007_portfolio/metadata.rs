use crate::shared::metadata::{
    ColumnMetadata, EntityApiMetadata, EntityListMetadata, EntityMetadataInfo, EntityUiMetadata,
    FieldKind, FieldMetadata, FieldUiMetadata, SubmitEncoding, ValidationRules,
};

/// New files go out as repeated `image` parts, kept server paths as a JSON
/// array in `existingImages`
pub const IMAGES_KIND: FieldKind = FieldKind::ImageList {
    upload_part: "image",
    keep_part: "existingImages",
};

pub static ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    schema_version: "1.0",
    entity_name: "Portfolio",
    entity_index: "a007_portfolio",
    slug: "portfolio",
    ui: EntityUiMetadata {
        element_name: "Portfolio",
        list_name: "Portfolios",
        report_title: "Portfolio Report",
        icon: "layers",
    },
    api: EntityApiMetadata {
        list: "getPortfolios",
        create: "createPortfolio",
        update: "updatePortfolio",
        delete: Some("deletePortfolio"),
    },
    list: EntityListMetadata {
        columns: &[
            ColumnMetadata::id(),
            ColumnMetadata::new("Order", "pinOrder", FieldKind::Order),
            ColumnMetadata::new("Image", "images", IMAGES_KIND),
            ColumnMetadata::new("VideoLink", "videoLink", FieldKind::LinkList),
            ColumnMetadata::text("Title", "title"),
            ColumnMetadata::text("Category", "category"),
            ColumnMetadata::text("Description", "description"),
            ColumnMetadata::status(),
        ],
        search_fields: &["id", "title", "category", "description", "status"],
        csv_columns: &[
            ColumnMetadata::id(),
            ColumnMetadata::text("Title", "title"),
            ColumnMetadata::text("Category", "category"),
            ColumnMetadata::new("Image", "images", IMAGES_KIND),
            ColumnMetadata::new("VideoLink", "videoLink", FieldKind::LinkList),
            ColumnMetadata::text("Description", "description"),
            ColumnMetadata::status(),
        ],
        csv_file_name: "Portfolios.csv",
        orderable: true,
    },
    submit: SubmitEncoding::Multipart,
};

pub static FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new(
        "title",
        FieldKind::Text,
        FieldUiMetadata::labeled("Portfolio title", "Enter portfolio title"),
        ValidationRules::required(),
    ),
    FieldMetadata::new(
        "category",
        FieldKind::Text,
        FieldUiMetadata::labeled("Portfolio category", "Enter category"),
        ValidationRules::required(),
    ),
    FieldMetadata::new(
        "description",
        FieldKind::LongText,
        FieldUiMetadata::labeled("Description", "Enter description"),
        ValidationRules::required(),
    ),
    FieldMetadata::new(
        "images",
        IMAGES_KIND,
        FieldUiMetadata::labeled("Images", ""),
        ValidationRules::none(),
    ),
    FieldMetadata::new(
        "videoLink",
        FieldKind::LinkList,
        FieldUiMetadata::labeled("Video links", "https://youtu.be/..."),
        ValidationRules::none(),
    ),
];

/// Persists the manual order of the whole collection
pub const UPDATE_ORDER_PATH: &str = "/admin/portfolio/updateOrder";
