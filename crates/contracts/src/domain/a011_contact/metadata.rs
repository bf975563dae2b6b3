use crate::shared::metadata::{
    ColumnMetadata, EntityApiMetadata, EntityListMetadata, EntityMetadataInfo, EntityUiMetadata,
    FieldKind, FieldMetadata, FieldUiMetadata, SubmitEncoding, ValidationRules,
};

pub static ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    schema_version: "1.0",
    entity_name: "Contact",
    entity_index: "a011_contact",
    slug: "contact",
    ui: EntityUiMetadata {
        element_name: "Contact",
        list_name: "Contacts",
        report_title: "Contact List",
        icon: "mail",
    },
    api: EntityApiMetadata {
        list: "getContacts",
        create: "createContact",
        update: "updateContact",
        delete: None,
    },
    list: EntityListMetadata {
        columns: &[
            ColumnMetadata::id(),
            ColumnMetadata::text("Name", "name"),
            ColumnMetadata::text("Email", "email"),
            ColumnMetadata::text("Phone", "phone"),
            ColumnMetadata::text("Subject", "subject"),
            ColumnMetadata::text("Description", "description"),
            ColumnMetadata::status(),
        ],
        search_fields: &["id", "name", "email", "phone", "subject", "description", "status"],
        csv_columns: &[
            ColumnMetadata::id(),
            ColumnMetadata::text("Name", "name"),
            ColumnMetadata::text("Email", "email"),
            ColumnMetadata::text("Phone", "phone"),
            ColumnMetadata::text("Subject", "subject"),
            ColumnMetadata::text("Description", "description"),
            ColumnMetadata::status(),
        ],
        csv_file_name: "Contacts.csv",
        orderable: false,
    },
    submit: SubmitEncoding::Json,
};

pub static FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new(
        "name",
        FieldKind::Text,
        FieldUiMetadata::labeled("Name", "Enter name"),
        ValidationRules::required(),
    ),
    FieldMetadata::new(
        "email",
        FieldKind::Email,
        FieldUiMetadata::labeled("Email", "Enter email"),
        ValidationRules::required_pattern(r"\S+@\S+\.\S+", "Invalid email"),
    ),
    FieldMetadata::new(
        "phone",
        FieldKind::Phone,
        FieldUiMetadata::labeled("Phone", "Enter phone"),
        ValidationRules::required(),
    ),
    FieldMetadata::new(
        "subject",
        FieldKind::Text,
        FieldUiMetadata::labeled("Subject", "Enter subject"),
        ValidationRules::required(),
    ),
    FieldMetadata::new(
        "description",
        FieldKind::LongText,
        FieldUiMetadata::labeled("Description", "Enter message"),
        ValidationRules::required(),
    ),
];
