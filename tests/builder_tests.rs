#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::rc::Rc;

use common::loaders::RecordingLoader;
use http::Method;
use routebuilder::{Loader, Route, RouteCollectionBuilder, RouteTable, RoutingError};
use serde_json::json;

fn imported_table(routes: &[(&str, &str)]) -> RouteTable {
    let mut table = RouteTable::new();
    for (name, path) in routes {
        table.add(*name, Route::new(*path, ""));
    }
    table
}

#[test]
fn test_add_returns_configurable_route() {
    common::tracing_init::init();
    let routes = RouteCollectionBuilder::new();

    let checkout = routes.add("/checkout", "AppBundle:Order:checkout", None);
    routes.add("/blogs", "AppBundle:Blog:list", Some("blog_list"));
    assert_eq!(checkout.handler(), "AppBundle:Order:checkout");

    let table = routes.build().unwrap();
    let blog_list = table.get("blog_list").unwrap();
    assert_eq!(blog_list.path(), "/blogs");
    assert_eq!(blog_list.handler(), "AppBundle:Blog:list");
    assert_eq!(table.get("checkout").unwrap().path(), "/checkout");
}

#[test]
fn test_flush_ordering() {
    common::tracing_init::init();
    let loader = Rc::new(RecordingLoader::supporting(imported_table(&[
        ("imported_route1", "/imported/foo1"),
        ("imported_route2", "/imported/foo2"),
    ])));
    let routes = RouteCollectionBuilder::with_loader(Rc::clone(&loader) as Rc<dyn Loader>);

    routes.add("/checkout", "AppBundle:Order:checkout", Some("checkout_route"));
    routes.import("admins_routing.yml", "/", None).unwrap();
    routes.add("/", "AppBundle:Default:homepage", Some("homepage"));
    routes.add("/admins", "AppBundle:admins:dashboard", Some("admins_dashboard"));
    routes.set_default("_locale", "fr");

    let table = routes.build().unwrap();
    assert_eq!(table.len(), 5);
    assert_eq!(
        table.names().collect::<Vec<_>>(),
        [
            "checkout_route",
            "imported_route1",
            "imported_route2",
            "homepage",
            "admins_dashboard",
        ]
    );
    for (name, route) in &table {
        assert_eq!(route.default("_locale"), Some(&json!("fr")), "{name}");
    }
    assert_eq!(loader.calls().len(), 1);
}

#[test]
fn test_flush_sets_route_names() {
    let routes = RouteCollectionBuilder::new();

    routes.add("/admins", "AppBundle:admins:dashboard", Some("admins_dashboard"));
    routes
        .add("/blogs", "AppBundle:Blog:list", None)
        .set_methods([Method::GET]);
    // numeric names are plain names
    routes.add("/products", "AppBundle:Product:list", Some("100"));

    let table = routes.build().unwrap();
    assert_eq!(
        table.names().collect::<Vec<_>>(),
        ["admins_dashboard", "GET_blogs", "100"]
    );
}

#[test]
fn test_flush_sets_details_on_children_routes() {
    let routes = RouteCollectionBuilder::new();

    routes
        .add("/blogs/{page}", "listAction", Some("blog_list"))
        .set_default("page", 1)
        .set_requirement("id", r"\d+")
        .set_option("expose", true)
        // the builder sets these too, but must not override them
        .set_default("_format", "html")
        .set_requirement("_format", "json|xml")
        .set_option("fooBar", true)
        .set_host("example.com")
        .set_condition("request.isSecure()")
        .set_schemes(["https"])
        .set_methods([Method::POST]);

    routes.add("/blogs/{id}", "editAction", Some("blog_edit"));

    routes
        .set_default("_format", "json")
        .set_requirement("_format", "xml")
        .set_option("fooBar", false)
        .set_host("example.org")
        .set_condition(r#"request.query.get("page")==1"#)
        .set_default("_locale", "fr")
        .set_requirement("_locale", "fr|en")
        .set_option("niceRoute", true)
        .set_schemes(["http"])
        .set_methods([Method::GET, Method::POST]);

    let table = routes.build().unwrap();

    let list = table.get("blog_list").unwrap();
    assert_eq!(list.default("page"), Some(&json!(1)));
    assert_eq!(list.requirement("id"), Some(r"\d+"));
    assert_eq!(list.option("expose"), Some(&json!(true)));
    assert_eq!(list.default("_format"), Some(&json!("html")));
    assert_eq!(list.requirement("_format"), Some("json|xml"));
    assert_eq!(list.option("fooBar"), Some(&json!(true)));
    assert_eq!(list.host(), "example.com");
    assert_eq!(list.condition(), "request.isSecure()");
    assert_eq!(list.schemes(), ["https"]);
    assert_eq!(list.methods(), [Method::POST]);
    assert_eq!(list.default("_locale"), Some(&json!("fr")));
    assert_eq!(list.requirement("_locale"), Some("fr|en"));
    assert_eq!(list.option("niceRoute"), Some(&json!(true)));

    let edit = table.get("blog_edit").unwrap();
    assert_eq!(edit.host(), "example.org");
    assert_eq!(edit.condition(), r#"request.query.get("page")==1"#);
    assert_eq!(edit.schemes(), ["http"]);
    assert_eq!(edit.methods(), [Method::GET, Method::POST]);
    assert_eq!(edit.default("_format"), Some(&json!("json")));
    assert_eq!(edit.option("fooBar"), Some(&json!(false)));
}

#[test]
fn test_inheritance_cascades_through_levels() {
    let root = RouteCollectionBuilder::new();
    let middle = root.create_builder();
    let leaf = root.create_builder();

    leaf.add("/deep", "deep", Some("deep"))
        .set_default("_format", "xml");
    middle.mount("/middle", &leaf).unwrap();
    root.mount("/root", &middle).unwrap();

    // the nearest ancestor wins, ancestors further up fill what is still unset
    middle.set_host("middle.example.com").set_default("_format", "json");
    root.set_host("root.example.com")
        .set_default("_format", "html")
        .set_default("_locale", "en")
        .set_schemes(["https"]);

    let table = root.build().unwrap();
    let deep = table.get("deep").unwrap();
    assert_eq!(deep.path(), "/root/middle/deep");
    assert_eq!(deep.host(), "middle.example.com");
    assert_eq!(deep.default("_format"), Some(&json!("xml")));
    assert_eq!(deep.default("_locale"), Some(&json!("en")));
    assert_eq!(deep.schemes(), ["https"]);
    assert!(deep.methods().is_empty());
}

fn build_prefixed(prefix: &str, path: &str) -> String {
    let routes = RouteCollectionBuilder::new();
    routes.add(path, "someController", Some("test_route"));

    let outer = RouteCollectionBuilder::new();
    outer.mount(prefix, &routes).unwrap();

    let table = outer.build().unwrap();
    table.get("test_route").unwrap().path().to_owned()
}

#[test]
fn test_flush_prefixes_paths() {
    // empty prefix leaves the path alone
    assert_eq!(build_prefixed("", "/foo"), "/foo");
    // placeholders are just text
    assert_eq!(build_prefixed("/{admins}", "/foo"), "/{admins}/foo");
    // "0" is a real prefix and gets its leading slash
    assert_eq!(build_prefixed("0", "/foo"), "/0/foo");
    // spaces are kept, one trailing slash is dropped
    assert_eq!(build_prefixed("/ /", "/foo"), "/ /foo");
}

#[test]
fn test_flush_sets_prefixes_with_multiple_levels() {
    common::tracing_init::init();
    let loader = Rc::new(RecordingLoader::supporting(imported_table(&[(
        "imported_route",
        "/foo",
    )])));
    let routes = RouteCollectionBuilder::with_loader(loader);

    routes.add("homepage", "MainController::homepageAction", Some("homepage"));

    let admins = routes.create_builder();
    admins.add("/dashboard", "AdminsController::dashboardAction", Some("admins_dashboard"));

    let admins_blog = routes.create_builder();
    admins_blog.add("/new", "BlogController::newAction", Some("admins_blog_new"));
    // mounted into admins before admins itself is mounted
    admins.mount("/blog", &admins_blog).unwrap();

    routes.mount("/admins", &admins).unwrap();
    // added after mounting
    admins.add("/users", "AdminsController::userAction", Some("admins_users"));

    // sub-builder mounted after the parent mount
    let admins_stats = routes.create_builder();
    admins_stats.add("/sales", "StatsController::indexAction", Some("admins_stats_sales"));
    admins.mount("/stats", &admins_stats).unwrap();

    admins.import("admins.yml", "/imported", None).unwrap();

    let table = routes.build().unwrap();
    let path = |name: &str| table.get(name).unwrap().path().to_owned();
    assert_eq!(path("homepage"), "/homepage");
    assert_eq!(path("admins_dashboard"), "/admins/dashboard");
    assert_eq!(path("admins_users"), "/admins/users");
    assert_eq!(path("admins_blog_new"), "/admins/blog/new");
    assert_eq!(path("admins_stats_sales"), "/admins/stats/sales");
    assert_eq!(path("imported_route"), "/admins/imported/foo");
}

#[test]
fn test_automatic_route_names_do_not_conflict() {
    let routes = RouteCollectionBuilder::new();

    let admins = routes.create_builder();
    admins.add("/dashboard", "", None);

    let account = routes.create_builder();
    account.add("/dashboard", "", None).set_methods([Method::GET]);
    account.add("/dashboard", "", None).set_methods([Method::POST]);

    routes.mount("/admins", &admins).unwrap();
    routes.mount("/account", &account).unwrap();

    let table = routes.build().unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(
        table.names().collect::<Vec<_>>(),
        ["admins_dashboard", "GET_account_dashboard", "POST_account_dashboard"]
    );
}

#[test]
fn test_inherited_methods_feed_derived_names() {
    let routes = RouteCollectionBuilder::new();
    let api = routes.create_builder();
    api.add("/items", "list", None);
    api.set_methods([Method::GET]);
    routes.mount("/api", &api).unwrap();

    let table = routes.build().unwrap();
    assert_eq!(table.names().collect::<Vec<_>>(), ["GET_api_items"]);
}

#[test]
fn test_identical_unnamed_routes_are_disambiguated() {
    let routes = RouteCollectionBuilder::new();
    let first = routes.create_builder();
    first.add("/dashboard", "", None);
    let second = routes.create_builder();
    second.add("/dashboard", "", None);

    routes.mount("/", &first).unwrap();
    routes.mount("/", &second).unwrap();

    let table = routes.build().unwrap();
    assert_eq!(
        table.names().collect::<Vec<_>>(),
        ["dashboard", "dashboard_1"]
    );
}

#[test]
fn test_explicit_name_conflict_fails_build() {
    let routes = RouteCollectionBuilder::new();
    routes.add("/a", "a", Some("dup"));
    let sub = routes.create_builder();
    sub.add("/b", "b", Some("dup"));
    routes.mount("/sub", &sub).unwrap();

    match routes.build() {
        Err(RoutingError::NameConflict { name }) => assert_eq!(name, "dup"),
        other => panic!("expected a name conflict, got {other:?}"),
    }
}

#[test]
fn test_mutation_after_build_is_seen_by_next_build() {
    let routes = RouteCollectionBuilder::new();
    let admin = routes.create_builder();
    routes.mount("/admin", &admin).unwrap();
    assert!(routes.build().unwrap().is_empty());

    let users = admin.add("/users", "users", Some("users"));
    users.set_methods([Method::GET]);

    let table = routes.build().unwrap();
    let users = table.get("users").unwrap();
    assert_eq!(users.path(), "/admin/users");
    assert_eq!(users.methods(), [Method::GET]);
}

#[test]
fn test_built_table_serializes_in_order() {
    let routes = RouteCollectionBuilder::new();
    routes.add("/z", "z", Some("zeta"));
    routes.add("/a", "a", Some("alpha")).set_host("example.com");
    routes.add_resource("config/routes.php");

    let value = serde_json::to_value(routes.build().unwrap()).unwrap();
    assert_eq!(
        value,
        json!({
            "routes": {
                "zeta": { "path": "/z", "handler": "z" },
                "alpha": { "path": "/a", "handler": "a", "host": "example.com" }
            },
            "resources": ["config/routes.php"]
        })
    );
    let names: Vec<&String> = value["routes"].as_object().unwrap().keys().collect();
    assert_eq!(names, ["zeta", "alpha"]);
}
