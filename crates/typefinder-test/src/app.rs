//! Application fixture: models, generic handlers and plugins.
//!
//! | Module | Types (declared order) |
//! |---|---|
//! | `models` | `Order`, `Customer`, `LegacyOrder` (in `models::archive`) |
//! | `handlers` | `Handler<T>` (trait), `OrderHandler`, `CustomerHandler`, `BaseHandler` (abstract), `Param` (generic parameter) |
//! | `plugins` | `Plugin` (trait), `BasePlugin`, `AuditPlugin`, `MailPlugin`, `ExtendedPlugin` |

use typefinder_core::{GenericDef, ModuleInfo, TypeInfo, TypeKind};

pub mod models {
    pub struct Order;
    pub struct Customer;

    pub mod archive {
        pub struct LegacyOrder;
    }
}

pub mod handlers {
    pub trait Handler<T> {
        fn handle(&self, message: &T);
    }

    pub struct OrderHandler;
    pub struct CustomerHandler;
    pub struct BaseHandler;

    /// Stands in for the unbound parameter of `Handler<T>`.
    pub struct Param;
}

pub mod plugins {
    pub trait Plugin {}

    #[derive(Default)]
    pub struct BasePlugin;
    #[derive(Default)]
    pub struct AuditPlugin;
    pub struct MailPlugin;
    #[derive(Default)]
    pub struct ExtendedPlugin;
}

/// Definition of `Handler<T>`.
pub fn handler_definition() -> GenericDef {
    GenericDef::of::<dyn handlers::Handler<()>>()
}

/// Descriptor of the `Plugin` trait.
pub fn plugin_interface() -> TypeInfo {
    TypeInfo::of::<dyn plugins::Plugin>().interface()
}

/// Descriptor of `BasePlugin`.
pub fn base_plugin() -> TypeInfo {
    TypeInfo::of::<plugins::BasePlugin>()
        .implements(&plugin_interface())
        .constructible()
}

pub fn models_module() -> ModuleInfo {
    use models::*;

    ModuleInfo::new("models")
        .with_type(TypeInfo::of::<Order>().constructible())
        .with_type(TypeInfo::of::<Customer>().constructible())
        .with_type(TypeInfo::of::<archive::LegacyOrder>().constructible())
}

pub fn handlers_module() -> ModuleInfo {
    use handlers::*;
    use models::{Customer, Order};

    let order_handler = TypeInfo::of::<dyn Handler<Order>>().interface();
    let customer_handler = TypeInfo::of::<dyn Handler<Customer>>().interface();

    ModuleInfo::new("handlers")
        .with_type(
            TypeInfo::of::<dyn Handler<Param>>().with_kind(TypeKind::GenericDefinition),
        )
        .with_type(
            TypeInfo::of::<OrderHandler>()
                .implements(&order_handler)
                .constructible(),
        )
        .with_type(TypeInfo::of::<CustomerHandler>().implements(&customer_handler))
        .with_type(
            TypeInfo::of::<BaseHandler>()
                .with_generic_base(handler_definition())
                .abstract_type(),
        )
        .with_type(TypeInfo::of::<Param>().generic_parameter())
}

pub fn plugins_module() -> ModuleInfo {
    use plugins::*;

    let base = base_plugin();
    ModuleInfo::new("plugins")
        .with_type(plugin_interface())
        .with_type(base.clone())
        .with_type(
            TypeInfo::of::<AuditPlugin>()
                .implements(&plugin_interface())
                .constructible(),
        )
        .with_type(TypeInfo::of::<MailPlugin>().implements(&plugin_interface()))
        .with_type(TypeInfo::of::<ExtendedPlugin>().extends(&base).constructible())
}

/// All fixture modules: models, handlers, plugins.
pub fn all_modules() -> Vec<ModuleInfo> {
    vec![models_module(), handlers_module(), plugins_module()]
}
