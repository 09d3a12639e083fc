//! Declarative sidebar navigation configuration.
//!
//! Plain data only: the host shell owns icon rendering, routing, and event
//! handling. Icon identifiers are an enum so hosts map them to whatever
//! icon set they ship.

use serde::Serialize;

/// Icon identifiers for sidebar entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MenuIcon {
    BarChart,
    AlignLeft,
    Dashboard,
    Alert,
    Bug,
    DeploymentUnit,
    LineChart,
    Settings,
    Api,
}

/// One sidebar entry: route target, display label, icon, and badge tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub route: &'static str,
    pub label: &'static str,
    pub icon: MenuIcon,
    pub tags: &'static [&'static str],
}

/// The sidebar menu in display order.
#[must_use]
pub fn sidebar_menu() -> &'static [MenuEntry] {
    &SIDEBAR_MENU
}

static SIDEBAR_MENU: [MenuEntry; 9] = [
    MenuEntry {
        route: "/application",
        label: "Services",
        icon: MenuIcon::BarChart,
        tags: &[],
    },
    MenuEntry {
        route: "/trace",
        label: "Traces",
        icon: MenuIcon::AlignLeft,
        tags: &[],
    },
    MenuEntry {
        route: "/dashboard",
        label: "Dashboards",
        icon: MenuIcon::Dashboard,
        tags: &[],
    },
    MenuEntry {
        route: "/alerts",
        label: "Alerts",
        icon: MenuIcon::Alert,
        tags: &[],
    },
    MenuEntry {
        route: "/errors",
        label: "Exceptions",
        icon: MenuIcon::Bug,
        tags: &[],
    },
    MenuEntry {
        route: "/service-map",
        label: "Service Map",
        icon: MenuIcon::DeploymentUnit,
        tags: &["Beta"],
    },
    MenuEntry {
        route: "/usage-explorer",
        label: "Usage Explorer",
        icon: MenuIcon::LineChart,
        tags: &[],
    },
    MenuEntry {
        route: "/settings",
        label: "Settings",
        icon: MenuIcon::Settings,
        tags: &[],
    },
    MenuEntry {
        route: "/add-instrumentation",
        label: "Add instrumentation",
        icon: MenuIcon::Api,
        tags: &[],
    },
];
