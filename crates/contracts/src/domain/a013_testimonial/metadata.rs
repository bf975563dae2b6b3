use crate::shared::metadata::{
    ColumnMetadata, EntityApiMetadata, EntityListMetadata, EntityMetadataInfo, EntityUiMetadata,
    FieldKind, FieldMetadata, FieldUiMetadata, SubmitEncoding, ValidationRules,
};

pub static ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    schema_version: "1.0",
    entity_name: "Testimonial",
    entity_index: "a013_testimonial",
    slug: "testimonial",
    ui: EntityUiMetadata {
        element_name: "Testimonial",
        list_name: "Testimonials",
        report_title: "Testimonials List",
        icon: "message-square",
    },
    api: EntityApiMetadata {
        list: "getTestimonials",
        create: "createTestimonial",
        update: "updateTestimonial",
        delete: None,
    },
    list: EntityListMetadata {
        columns: &[
            ColumnMetadata::id(),
            ColumnMetadata::image("Profile", "clientProfile"),
            ColumnMetadata::image("BgImage", "bgImage"),
            ColumnMetadata::text("Client", "clientName"),
            ColumnMetadata::text("Title", "title"),
            ColumnMetadata::text("SubTitle", "subTitle"),
            ColumnMetadata::text("Description", "description"),
            ColumnMetadata::text("Role", "role"),
            ColumnMetadata::status(),
        ],
        search_fields: &["id", "clientName", "title", "subTitle", "role", "description", "status"],
        csv_columns: &[
            ColumnMetadata::id(),
            ColumnMetadata::text("Client", "clientName"),
            ColumnMetadata::text("Title", "title"),
            ColumnMetadata::text("SubTitle", "subTitle"),
            ColumnMetadata::text("Role", "role"),
            ColumnMetadata::status(),
            ColumnMetadata::text("Description", "description"),
            ColumnMetadata::text("Profile", "clientProfile"),
        ],
        csv_file_name: "Testimonials.csv",
        orderable: false,
    },
    submit: SubmitEncoding::Multipart,
};

pub static FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new(
        "clientName",
        FieldKind::Text,
        FieldUiMetadata::labeled("Client name", "Enter client name"),
        ValidationRules::required(),
    ),
    FieldMetadata::new(
        "title",
        FieldKind::Text,
        FieldUiMetadata::labeled("Title", "Enter title"),
        ValidationRules::required(),
    ),
    FieldMetadata::new(
        "subTitle",
        FieldKind::Text,
        FieldUiMetadata::labeled("Subtitle", "Enter subtitle"),
        ValidationRules::required(),
    ),
    FieldMetadata::new(
        "role",
        FieldKind::Text,
        FieldUiMetadata::labeled("Role", "Enter role"),
        ValidationRules::required(),
    ),
    FieldMetadata::new(
        "description",
        FieldKind::LongText,
        FieldUiMetadata::labeled("Description", "Enter testimonial"),
        ValidationRules::required(),
    ),
    FieldMetadata::new(
        "clientProfile",
        FieldKind::Image,
        FieldUiMetadata::labeled("Client profile image", ""),
        ValidationRules::required(),
    ),
    FieldMetadata::new(
        "bgImage",
        FieldKind::Image,
        FieldUiMetadata::labeled("Background image", ""),
        ValidationRules::required(),
    ),
];
