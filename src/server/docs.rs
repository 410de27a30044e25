//! OpenAPI document assembly.
//!
//! The annotated auth, user and import handlers are collected by the `ApiDoc` derive.
//! The generic resource handlers cannot be annotated, so their operations and schemas
//! are built per resource with the `utoipa` builder API and merged in.

use utoipa::{
    openapi::{
        path::{
            HttpMethod, Operation, OperationBuilder, ParameterBuilder, ParameterIn, PathItem,
            PathsBuilder,
        },
        request_body::RequestBodyBuilder,
        schema::{ArrayBuilder, ObjectBuilder, Schema, Type},
        security::{HttpAuthScheme, HttpBuilder, SecurityRequirement, SecurityScheme},
        tag::{Tag, TagBuilder},
        ComponentsBuilder, ContentBuilder, OpenApiBuilder, Ref, RefOr, Required, Response,
        ResponseBuilder,
    },
    Modify, OpenApi, ToSchema,
};

use crate::{
    model::{
        api::{ErrorDto, HealthDto, MessageDto},
        auth::{
            AuthenticationRequestDto, AuthenticationResponseDto, LoginFormDto, ResetPasswordDto,
            TokenDto,
        },
        import::{ImportJobDto, ImportReportDto, ImportStartedDto, ImportStateDto},
        user::{CreateUserDto, Role, UpdateUserDto, UserDto},
    },
    server::{
        controller::{auth, health, import, oauth, password, user},
        model::resource::{visit_resources, Resource, ResourceVisitor},
    },
};

const BEARER: &str = "bearer";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Football Stats API",
        description = "Football statistics imported from API-Football"
    ),
    paths(
        health::health,
        auth::authenticate,
        auth::access_token,
        auth::test_token,
        oauth::google_login,
        oauth::google_callback,
        password::recover_password,
        password::reset_password,
        user::get_me,
        user::get_users,
        user::create_user,
        user::get_user,
        user::update_user,
        user::delete_user,
        import::get_imports,
        import::refresh_all,
    ),
    components(schemas(
        ErrorDto,
        MessageDto,
        HealthDto,
        LoginFormDto,
        TokenDto,
        AuthenticationRequestDto,
        AuthenticationResponseDto,
        ResetPasswordDto,
        Role,
        UserDto,
        CreateUserDto,
        UpdateUserDto,
        ImportReportDto,
        ImportStateDto,
        ImportJobDto,
        ImportStartedDto,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Liveness"),
        (name = "auth", description = "Login, tokens and password recovery"),
        (name = "users", description = "Account management"),
        (name = "imports", description = "Import jobs"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            BEARER,
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the complete document.
///
/// # Arguments
/// - `expose_writes` - Whether resource create, patch, delete and refresh operations
///   are documented
pub fn openapi(expose_writes: bool) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();

    let mut fragments = ResourceDocs {
        expose_writes,
        paths: PathsBuilder::new(),
        components: ComponentsBuilder::new(),
        tags: Vec::new(),
    };
    visit_resources(&mut fragments);

    doc.merge(fragments.build());
    doc
}

/// Collects the path and schema fragments of every resource.
struct ResourceDocs {
    expose_writes: bool,
    paths: PathsBuilder,
    components: ComponentsBuilder,
    tags: Vec<Tag>,
}

impl ResourceDocs {
    fn build(self) -> utoipa::openapi::OpenApi {
        OpenApiBuilder::new()
            .paths(self.paths.build())
            .components(Some(self.components.build()))
            .tags(Some(self.tags))
            .build()
    }
}

impl ResourceVisitor for ResourceDocs {
    fn visit<R: Resource>(&mut self) {
        let schema = <R::Model as ToSchema>::name().to_string();
        let collection = format!("/api/v1/{}", R::PATH);
        let item = format!("/api/v1/{}/{{id}}", R::PATH);

        let list = operation::<R>("find", format!("List {} rows", R::NAME))
            .parameter(query_parameter("limit", "Maximum number of rows"))
            .parameter(query_parameter("skip", "Number of rows to skip"))
            .response("200", json_response("Rows ordered by id", array_of(&schema)));
        let get = operation::<R>("get", format!("Get a {} by id", R::NAME))
            .parameter(id_parameter())
            .response("200", json_response("The row", reference(&schema)))
            .response("404", error_response("Not found"));

        let mut paths = std::mem::replace(&mut self.paths, PathsBuilder::new())
            .path(&collection, PathItem::new(HttpMethod::Get, finish(list)))
            .path(&item, PathItem::new(HttpMethod::Get, finish(get)));

        if self.expose_writes {
            let create = operation::<R>("create", format!("Create a {}", R::NAME))
                .request_body(Some(json_body(&schema)))
                .response("201", json_response("The inserted row", reference(&schema)))
                .response("400", error_response("Missing field or unknown reference"))
                .response("409", error_response("Unique key already taken"));
            let patch = operation::<R>("patch", format!("Update fields of a {}", R::NAME))
                .parameter(id_parameter())
                .request_body(Some(json_body(&schema)))
                .response("200", json_response("The updated row", reference(&schema)))
                .response("404", error_response("Not found"));
            let remove = operation::<R>("remove", format!("Delete a {}", R::NAME))
                .parameter(id_parameter())
                .response("200", json_response("The deleted row", reference(&schema)))
                .response("404", error_response("Not found"));
            let refresh = operation::<R>("refresh", format!("Run the {} importer", R::IMPORT))
                .parameter(query_parameter("league", "Provider league id"))
                .parameter(query_parameter("season", "Season year"))
                .response(
                    "202",
                    json_response("Import started", reference("ImportJobDto")),
                )
                .response("409", error_response("Importer already running"));

            paths = paths
                .path(&collection, PathItem::new(HttpMethod::Post, finish(create)))
                .path(&item, PathItem::new(HttpMethod::Patch, finish(patch)))
                .path(&item, PathItem::new(HttpMethod::Delete, finish(remove)))
                .path(
                    format!("{}/refresh", collection),
                    PathItem::new(HttpMethod::Post, finish(refresh)),
                );
        }

        self.paths = paths;
        self.components = std::mem::replace(&mut self.components, ComponentsBuilder::new())
            .schema_from::<R::Model>();
        self.tags.push(TagBuilder::new().name(R::PATH).build());
    }
}

/// Common part of every resource operation: tag, id, summary, auth and 401/403.
fn operation<R: Resource>(action: &str, summary: String) -> OperationBuilder {
    OperationBuilder::new()
        .tag(R::PATH)
        .operation_id(Some(format!("{}_{}", action, R::PATH.replace('-', "_"))))
        .summary(Some(summary))
        .security(SecurityRequirement::new(BEARER, Vec::<String>::new()))
        .response("401", error_response("Missing or invalid token"))
        .response("403", error_response("User is not an admin"))
}

fn finish(builder: OperationBuilder) -> Operation {
    builder
        .response("500", error_response("Internal server error"))
        .build()
}

fn reference(schema: &str) -> RefOr<Schema> {
    RefOr::Ref(Ref::from_schema_name(schema))
}

fn array_of(schema: &str) -> RefOr<Schema> {
    RefOr::T(Schema::Array(
        ArrayBuilder::new()
            .items(Ref::from_schema_name(schema))
            .build(),
    ))
}

fn json_response(description: &str, schema: RefOr<Schema>) -> Response {
    ResponseBuilder::new()
        .description(description)
        .content(
            "application/json",
            ContentBuilder::new().schema(Some(schema)).build(),
        )
        .build()
}

fn error_response(description: &str) -> Response {
    json_response(description, reference(&ErrorDto::name()))
}

fn json_body(schema: &str) -> utoipa::openapi::request_body::RequestBody {
    RequestBodyBuilder::new()
        .content(
            "application/json",
            ContentBuilder::new().schema(Some(reference(schema))).build(),
        )
        .required(Some(Required::True))
        .build()
}

fn integer() -> RefOr<Schema> {
    RefOr::T(Schema::Object(
        ObjectBuilder::new().schema_type(Type::Integer).build(),
    ))
}

fn id_parameter() -> utoipa::openapi::path::Parameter {
    ParameterBuilder::new()
        .name("id")
        .parameter_in(ParameterIn::Path)
        .required(Required::True)
        .description(Some("Row id"))
        .schema(Some(integer()))
        .build()
}

fn query_parameter(name: &str, description: &str) -> utoipa::openapi::path::Parameter {
    ParameterBuilder::new()
        .name(name)
        .parameter_in(ParameterIn::Query)
        .required(Required::False)
        .description(Some(description))
        .schema(Some(integer()))
        .build()
}
