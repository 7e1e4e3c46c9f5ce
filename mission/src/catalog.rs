//! Static catalogs: planets, recent missions, monthly activity, dashboard stats.
//!
//! DESIGN
//! ======
//! Everything here is `'static` data loaded once with the binary. Views only
//! read it; nothing in the system mutates a catalog entry. Records use
//! `&'static str` so the tables can live in `const`/`static` items without
//! allocation.

use serde::Serialize;

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// Upper bound of the danger scale.
pub const MAX_DANGER_LEVEL: u8 = 10;

/// Error returned by [`check_catalog`] when a static table is inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("planet {id} has danger level {level} outside 0..={MAX_DANGER_LEVEL}")]
    DangerOutOfRange { id: &'static str, level: u8 },
    #[error("duplicate planet id: {0}")]
    DuplicatePlanet(&'static str),
    #[error("mission {0} has no crew")]
    EmptyCrew(&'static str),
    #[error("mission {id} end date does not match status {status}")]
    EndDateMismatch { id: &'static str, status: ExplorationStatus },
}

/// Planet classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlanetKind {
    Rocky,
    GasGiant,
    IceGiant,
    Dwarf,
}

impl PlanetKind {
    /// Wire/slug form, e.g. `"gas-giant"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rocky => "rocky",
            Self::GasGiant => "gas-giant",
            Self::IceGiant => "ice-giant",
            Self::Dwarf => "dwarf",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Rocky => "Planeta skalista",
            Self::GasGiant => "Gazowy olbrzym",
            Self::IceGiant => "Lodowy olbrzym",
            Self::Dwarf => "Planeta karłowata",
        }
    }
}

impl std::fmt::Display for PlanetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exploration/mission lifecycle, shared by planets and missions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExplorationStatus {
    Planned,
    InProgress,
    Completed,
    Failed,
}

impl ExplorationStatus {
    pub const ALL: [Self; 4] = [Self::Planned, Self::InProgress, Self::Completed, Self::Failed];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }

    /// Display label shown on badges.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Planned => "Planowana",
            Self::InProgress => "W trakcie",
            Self::Completed => "Zakończona",
            Self::Failed => "Niepowodzenie",
        }
    }

    /// Parse the slug form. Returns `None` for anything outside the four values.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }

    /// Whether a mission in this status has finished and carries an end date.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

impl std::fmt::Display for ExplorationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable physical description of a planet.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: PlanetKind,
    pub description: &'static str,
    /// Million km from the Sun.
    pub distance_from_sun: f64,
    /// Equatorial diameter in km.
    pub diameter: f64,
    /// Surface gravity relative to Earth.
    pub gravity: f64,
    /// Mean surface temperature in °C.
    pub temperature: f64,
    pub image: &'static str,
    pub color: &'static str,
}

/// A planet together with its exploration record.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorablePlanet {
    #[serde(flatten)]
    pub planet: Planet,
    pub missions_count: u32,
    pub last_explored: Option<&'static str>,
    pub exploration_status: ExplorationStatus,
    /// 0..=10.
    pub danger_level: u8,
}

impl ExplorablePlanet {
    /// Width of the danger indicator, linear 0..=10 -> 0..=100 percent.
    #[must_use]
    pub fn danger_percent(&self) -> f64 {
        f64::from(self.danger_level.min(MAX_DANGER_LEVEL)) * 10.0
    }
}

impl std::ops::Deref for ExplorablePlanet {
    type Target = Planet;

    fn deref(&self) -> &Planet {
        &self.planet
    }
}

/// A crewed mission record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    pub id: &'static str,
    pub name: &'static str,
    /// Display name of the destination body.
    pub destination: &'static str,
    pub status: ExplorationStatus,
    pub crew_size: u32,
    pub start_date: &'static str,
    /// Present only for completed or failed missions.
    pub end_date: Option<&'static str>,
}

/// One month of the activity chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub month: &'static str,
    pub missions: u32,
    pub discoveries: u32,
}

/// Visual emphasis of a dashboard stat tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatVariant {
    #[default]
    Default,
    Highlight,
}

/// Icon hint for a dashboard stat tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatIcon {
    Rocket,
    Globe,
    Users,
    Star,
}

/// A headline number on the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardStat {
    pub value: u32,
    pub label: &'static str,
    pub icon: StatIcon,
    pub variant: StatVariant,
}

const fn planet(
    id: &'static str,
    name: &'static str,
    kind: PlanetKind,
    description: &'static str,
    physical: [f64; 4],
    image: &'static str,
    color: &'static str,
) -> Planet {
    Planet {
        id,
        name,
        kind,
        description,
        distance_from_sun: physical[0],
        diameter: physical[1],
        gravity: physical[2],
        temperature: physical[3],
        image,
        color,
    }
}

pub static PLANETS: &[ExplorablePlanet] = &[
    ExplorablePlanet {
        planet: planet(
            "mercury",
            "Merkury",
            PlanetKind::Rocky,
            "Najmniejsza planeta Układu Słonecznego, najbliżej Słońca. Ekstremalne wahania temperatury między dniem a nocą.",
            [57.9, 4879.0, 0.38, 167.0],
            "/assets/planets/mercury.svg",
            "#9ca3af",
        ),
        missions_count: 3,
        last_explored: Some("2025-11-04"),
        exploration_status: ExplorationStatus::Completed,
        danger_level: 6,
    },
    ExplorablePlanet {
        planet: planet(
            "venus",
            "Wenus",
            PlanetKind::Rocky,
            "Gęsta atmosfera z dwutlenku węgla i chmury kwasu siarkowego tworzą najgorętszą powierzchnię w układzie.",
            [108.2, 12104.0, 0.91, 464.0],
            "/assets/planets/venus.svg",
            "#f59e0b",
        ),
        missions_count: 4,
        last_explored: Some("2025-07-02"),
        exploration_status: ExplorationStatus::Failed,
        danger_level: 9,
    },
    ExplorablePlanet {
        planet: planet(
            "mars",
            "Mars",
            PlanetKind::Rocky,
            "Czerwona Planeta z najwyższym wulkanem w Układzie Słonecznym. Główny cel przyszłej kolonizacji.",
            [227.9, 6779.0, 0.38, -65.0],
            "/assets/planets/mars.svg",
            "#ef4444",
        ),
        missions_count: 12,
        last_explored: Some("2026-03-14"),
        exploration_status: ExplorationStatus::InProgress,
        danger_level: 4,
    },
    ExplorablePlanet {
        planet: planet(
            "jupiter",
            "Jowisz",
            PlanetKind::GasGiant,
            "Największa planeta układu. Wielka Czerwona Plama to burza większa od Ziemi, trwająca od stuleci.",
            [778.5, 139_820.0, 2.53, -110.0],
            "/assets/planets/jupiter.svg",
            "#f97316",
        ),
        missions_count: 6,
        last_explored: Some("2026-01-20"),
        exploration_status: ExplorationStatus::InProgress,
        danger_level: 8,
    },
    ExplorablePlanet {
        planet: planet(
            "saturn",
            "Saturn",
            PlanetKind::GasGiant,
            "Gazowy olbrzym otoczony najbardziej rozbudowanym systemem pierścieni z lodu i skał.",
            [1432.0, 116_460.0, 1.07, -140.0],
            "/assets/planets/saturn.svg",
            "#eab308",
        ),
        missions_count: 5,
        last_explored: Some("2025-04-18"),
        exploration_status: ExplorationStatus::Completed,
        danger_level: 7,
    },
    ExplorablePlanet {
        planet: planet(
            "neptune",
            "Neptun",
            PlanetKind::IceGiant,
            "Najdalsza planeta układu, z najsilniejszymi wiatrami, sięgającymi 2000 km/h.",
            [4495.1, 49244.0, 1.14, -200.0],
            "/assets/planets/neptune.svg",
            "#3b82f6",
        ),
        missions_count: 3,
        last_explored: Some("2024-09-30"),
        exploration_status: ExplorationStatus::Planned,
        danger_level: 8,
    },
    ExplorablePlanet {
        planet: planet(
            "pluto",
            "Pluton",
            PlanetKind::Dwarf,
            "Planeta karłowata w Pasie Kuipera, z lodowcem azotowym w kształcie serca.",
            [5906.4, 2377.0, 0.06, -229.0],
            "/assets/planets/pluto.svg",
            "#a78bfa",
        ),
        missions_count: 0,
        last_explored: None,
        exploration_status: ExplorationStatus::Planned,
        danger_level: 5,
    },
];

pub static RECENT_MISSIONS: &[Mission] = &[
    Mission {
        id: "m-001",
        name: "Ares VII",
        destination: "Mars",
        status: ExplorationStatus::InProgress,
        crew_size: 6,
        start_date: "2026-03-14",
        end_date: None,
    },
    Mission {
        id: "m-002",
        name: "Galileo Deep",
        destination: "Jowisz",
        status: ExplorationStatus::InProgress,
        crew_size: 8,
        start_date: "2026-01-20",
        end_date: None,
    },
    Mission {
        id: "m-003",
        name: "Hermes Scout",
        destination: "Merkury",
        status: ExplorationStatus::Completed,
        crew_size: 3,
        start_date: "2025-09-01",
        end_date: Some("2025-11-04"),
    },
    Mission {
        id: "m-004",
        name: "Aphrodite Probe",
        destination: "Wenus",
        status: ExplorationStatus::Failed,
        crew_size: 2,
        start_date: "2025-06-10",
        end_date: Some("2025-07-02"),
    },
    Mission {
        id: "m-005",
        name: "Triton Horizon",
        destination: "Neptun",
        status: ExplorationStatus::Planned,
        crew_size: 5,
        start_date: "2026-12-01",
        end_date: None,
    },
];

pub static MISSION_CHART_DATA: &[ChartPoint] = &[
    ChartPoint { month: "Sty", missions: 2, discoveries: 1 },
    ChartPoint { month: "Lut", missions: 3, discoveries: 2 },
    ChartPoint { month: "Mar", missions: 2, discoveries: 4 },
    ChartPoint { month: "Kwi", missions: 4, discoveries: 3 },
    ChartPoint { month: "Maj", missions: 3, discoveries: 5 },
    ChartPoint { month: "Cze", missions: 5, discoveries: 4 },
    ChartPoint { month: "Lip", missions: 4, discoveries: 6 },
    ChartPoint { month: "Sie", missions: 6, discoveries: 5 },
    ChartPoint { month: "Wrz", missions: 4, discoveries: 7 },
];

pub static DASHBOARD_STATS: &[DashboardStat] = &[
    DashboardStat { value: 33, label: "Wykonanych misji", icon: StatIcon::Rocket, variant: StatVariant::Highlight },
    DashboardStat { value: 6, label: "Zbadanych planet", icon: StatIcon::Globe, variant: StatVariant::Default },
    DashboardStat { value: 128, label: "Kosmonautów", icon: StatIcon::Users, variant: StatVariant::Default },
    DashboardStat { value: 47, label: "Odkryć naukowych", icon: StatIcon::Star, variant: StatVariant::Default },
];

/// Look up a catalog planet by id.
#[must_use]
pub fn planet_by_id(id: &str) -> Option<&'static ExplorablePlanet> {
    PLANETS.iter().find(|p| p.id == id)
}

/// Whether `id` names a catalog planet.
#[must_use]
pub fn is_known_planet(id: &str) -> bool {
    planet_by_id(id).is_some()
}

/// Verify the invariants the views rely on.
///
/// # Errors
///
/// Returns the first [`CatalogError`] found, checking planets before missions.
pub fn check_catalog(planets: &[ExplorablePlanet], missions: &[Mission]) -> Result<(), CatalogError> {
    let mut seen = std::collections::HashSet::new();
    for p in planets {
        if p.danger_level > MAX_DANGER_LEVEL {
            return Err(CatalogError::DangerOutOfRange { id: p.id, level: p.danger_level });
        }
        if !seen.insert(p.id) {
            return Err(CatalogError::DuplicatePlanet(p.id));
        }
    }
    for m in missions {
        if m.crew_size == 0 {
            return Err(CatalogError::EmptyCrew(m.id));
        }
        if m.end_date.is_some() != m.status.is_terminal() {
            return Err(CatalogError::EndDateMismatch { id: m.id, status: m.status });
        }
    }
    Ok(())
}
