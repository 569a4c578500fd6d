use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    assistant::prompts::WriterLanguage,
    dto::{
        admin::{AuditList, BulkGoldUpdateRequest, BulkGoldUpdateResponse, GoldQuoteRequest},
        assistant::{
            ChatReply, LookupRequest, LookupResponse, SendMessageRequest, Transcript,
            WriteRequest, WriteResponse,
        },
        auth::{GuestResponse, LoginRequest, LoginResponse},
        cart::{AddToCartRequest, CartView, UpdateQuantityRequest},
        products::{CategorySummary, CreateProductRequest, ProductList, UpdateProductRequest},
        users::{PanelStats, Profile},
    },
    models::{
        AuditEntry, CartItem, Category, GroundingSource, Message, MessageRole, Product, Role,
        Specification, User,
    },
    pricing::GoldQuote,
    response::{ApiResponse, Meta},
    routes::{admin, assistant, auth, cart, health, params, products, users},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::login,
        auth::signup,
        auth::guest,
        products::list_products,
        products::list_categories,
        products::get_product,
        cart::cart_list,
        cart::add_to_cart,
        cart::update_quantity,
        cart::remove_from_cart,
        cart::clear_cart,
        users::me,
        assistant::transcript,
        assistant::send_message,
        assistant::reset,
        assistant::lookup_product,
        assistant::write_text,
        admin::create_product,
        admin::update_product,
        admin::delete_product,
        admin::bulk_update_gold,
        admin::quote_gold,
        admin::export_products,
        admin::audit_log
    ),
    components(
        schemas(
            User,
            Role,
            Product,
            Category,
            Specification,
            CartItem,
            Message,
            MessageRole,
            GroundingSource,
            AuditEntry,
            GoldQuote,
            WriterLanguage,
            LoginRequest,
            LoginResponse,
            GuestResponse,
            CreateProductRequest,
            UpdateProductRequest,
            ProductList,
            CategorySummary,
            AddToCartRequest,
            UpdateQuantityRequest,
            CartView,
            BulkGoldUpdateRequest,
            BulkGoldUpdateResponse,
            GoldQuoteRequest,
            AuditList,
            SendMessageRequest,
            ChatReply,
            Transcript,
            LookupRequest,
            LookupResponse,
            WriteRequest,
            WriteResponse,
            Profile,
            PanelStats,
            params::Pagination,
            params::ProductQuery,
            params::ProductSortBy,
            params::SortOrder,
            Meta,
            ApiResponse<Product>,
            ApiResponse<ProductList>,
            ApiResponse<CartView>,
            ApiResponse<Transcript>
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Catalog endpoints"),
        (name = "Cart", description = "Cart endpoints"),
        (name = "Users", description = "User panel endpoints"),
        (name = "Assistant", description = "AI shopping assistant endpoints"),
        (name = "Admin", description = "Admin endpoints"),
        (name = "Auth", description = "Authentication endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
