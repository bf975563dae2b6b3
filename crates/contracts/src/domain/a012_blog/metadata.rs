use crate::shared::metadata::{
    ColumnMetadata, EntityApiMetadata, EntityListMetadata, EntityMetadataInfo, EntityUiMetadata,
    FieldKind, FieldMetadata, FieldUiMetadata, SubmitEncoding, ValidationRules,
};

pub static ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    schema_version: "1.0",
    entity_name: "Blog",
    entity_index: "a012_blog",
    slug: "blog",
    ui: EntityUiMetadata {
        element_name: "Blog",
        list_name: "Blogs",
        report_title: "Blog List",
        icon: "file-text",
    },
    api: EntityApiMetadata {
        list: "getBlogs",
        create: "createBlog",
        update: "updateBlog",
        delete: Some("deleteBlog"),
    },
    list: EntityListMetadata {
        columns: &[
            ColumnMetadata::id(),
            ColumnMetadata::image("Image", "image"),
            ColumnMetadata::text("Title", "title"),
            ColumnMetadata::new("Date", "date", FieldKind::Date),
            ColumnMetadata::text("Categories", "categories"),
            ColumnMetadata::text("Description", "description"),
            ColumnMetadata::status(),
        ],
        search_fields: &["id", "title", "categories", "description", "date", "status"],
        csv_columns: &[
            ColumnMetadata::id(),
            ColumnMetadata::text("Title", "title"),
            ColumnMetadata::new("Date", "date", FieldKind::Date),
            ColumnMetadata::text("Image", "image"),
            ColumnMetadata::text("Categories", "categories"),
            ColumnMetadata::text("Description", "description"),
            ColumnMetadata::status(),
        ],
        csv_file_name: "Blogs.csv",
        orderable: false,
    },
    submit: SubmitEncoding::Multipart,
};

pub static FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new(
        "title",
        FieldKind::Text,
        FieldUiMetadata::labeled("Title", "Enter blog title"),
        ValidationRules::required(),
    ),
    FieldMetadata::new(
        "date",
        FieldKind::Date,
        FieldUiMetadata::labeled("Date", ""),
        ValidationRules::required(),
    ),
    FieldMetadata::new(
        "categories",
        FieldKind::Text,
        FieldUiMetadata::labeled("Categories", "e.g. Design, Marketing"),
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
        FieldUiMetadata::labeled("Blog image", ""),
        ValidationRules::required(),
    ),
];
