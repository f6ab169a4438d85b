use super::*;

// =============================================================
// Table contents
// =============================================================

#[test]
fn table_paths_are_unique() {
    for (i, a) in ROUTES.iter().enumerate() {
        for b in &ROUTES[i + 1..] {
            assert_ne!(a.path, b.path);
            assert_ne!(a.name, b.name);
        }
    }
}

#[test]
fn public_routes_do_not_require_auth() {
    for name in [RouteName::Home, RouteName::Login, RouteName::Register] {
        assert!(!name.entry().unwrap().requires_auth, "{name:?}");
    }
}

#[test]
fn stock_and_backtest_routes_require_auth() {
    for name in [RouteName::Stocks, RouteName::Backtest, RouteName::Backtest2000] {
        assert!(name.entry().unwrap().requires_auth, "{name:?}");
    }
}

#[test]
fn route_names_map_to_paths() {
    assert_eq!(RouteName::Home.path(), "/");
    assert_eq!(RouteName::Login.path(), "/login");
    assert_eq!(RouteName::Stocks.path(), "/stocks");
    assert_eq!(RouteName::Backtest2000.path(), "/backtest2000");
}

#[test]
fn public_constructor_defaults_requires_auth_false() {
    let entry = RouteEntry::public("/x", RouteName::Home, ViewId::Home, "X");
    assert!(!entry.requires_auth);
}

// =============================================================
// normalize_path
// =============================================================

#[test]
fn normalize_keeps_root() {
    assert_eq!(normalize_path("/"), "/");
    assert_eq!(normalize_path(""), "/");
}

#[test]
fn normalize_strips_trailing_slash() {
    assert_eq!(normalize_path("/stocks/"), "/stocks");
}

#[test]
fn normalize_strips_query_and_fragment() {
    assert_eq!(normalize_path("/stocks?symbol=AAPL"), "/stocks");
    assert_eq!(normalize_path("/backtest#results"), "/backtest");
    assert_eq!(normalize_path("/?next=/stocks"), "/");
}

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_finds_exact_paths() {
    assert_eq!(resolve("/stocks").unwrap().name, RouteName::Stocks);
    assert_eq!(resolve("/").unwrap().name, RouteName::Home);
    assert_eq!(resolve("/login/").unwrap().name, RouteName::Login);
}

#[test]
fn resolve_does_not_prefix_match() {
    assert_eq!(resolve("/backtest2000").unwrap().name, RouteName::Backtest2000);
    assert_eq!(resolve("/backtest").unwrap().name, RouteName::Backtest);
    assert!(resolve("/backtest2").is_none());
}

#[test]
fn resolve_unknown_path_is_none() {
    assert!(resolve("/portfolio").is_none());
    assert!(resolve("/Stocks").is_none());
}
