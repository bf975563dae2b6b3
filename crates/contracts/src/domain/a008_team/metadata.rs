use crate::shared::metadata::{
    ColumnMetadata, EntityApiMetadata, EntityListMetadata, EntityMetadataInfo, EntityUiMetadata,
    FieldKind, FieldMetadata, FieldUiMetadata, SubmitEncoding, ValidationRules,
};

pub static ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    schema_version: "1.0",
    entity_name: "Team",
    entity_index: "a008_team",
    slug: "team",
    ui: EntityUiMetadata {
        element_name: "Team Member",
        list_name: "Team Members",
        report_title: "Team Report",
        icon: "users",
    },
    api: EntityApiMetadata {
        list: "getTeams",
        create: "createTeam",
        update: "updateTeam",
        delete: Some("deleteTeam"),
    },
    list: EntityListMetadata {
        columns: &[
            ColumnMetadata::id(),
            ColumnMetadata::image("Image", "image"),
            ColumnMetadata::text("Name", "name"),
            ColumnMetadata::text("Role", "role"),
            ColumnMetadata::status(),
        ],
        search_fields: &["id", "name", "role", "status"],
        csv_columns: &[
            ColumnMetadata::id(),
            ColumnMetadata::text("Name", "name"),
            ColumnMetadata::text("Role", "role"),
            ColumnMetadata::text("Image", "image"),
            ColumnMetadata::status(),
        ],
        csv_file_name: "Teams.csv",
        orderable: false,
    },
    submit: SubmitEncoding::Multipart,
};

pub static FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new(
        "name",
        FieldKind::Text,
        FieldUiMetadata::labeled("Name", "Enter name"),
        ValidationRules::required(),
    ),
    FieldMetadata::new(
        "role",
        FieldKind::Text,
        FieldUiMetadata::labeled("Role", "Enter role"),
        ValidationRules::required(),
    ),
    FieldMetadata::new(
        "image",
        FieldKind::Image,
        FieldUiMetadata::labeled("Image", ""),
        ValidationRules::required(),
    ),
];
