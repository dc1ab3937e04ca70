//! Page data loaders.
//!
//! One loader per route. Every loader follows the same shape: query the
//! remote store, log and substitute an empty collection when a query fails,
//! and hand a plain view model to the rendering layer. The admin project
//! loader is the one exception where absence is fatal (the page 404s)
//! instead of silently substituted.

use std::collections::HashMap;

use anyhow::Result;
use serde::Serialize;
use tracing::warn;

use crate::models::{Education, Experience, Project, Session, SiteSettings, TechColor};
use crate::supabase::SupabaseClient;

/// Data available to every route: session flag, the technology color table
/// (as rows and as a name→color lookup) and the site settings singleton.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutData {
    pub tech_colors: HashMap<String, String>,
    pub technologies: Vec<TechColor>,
    pub is_logged_in: bool,
    pub site: Option<SiteSettings>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeData {
    pub projects: Vec<Project>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsData {
    pub projects: Vec<Project>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutData {
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboardData {
    pub top_projects: Vec<Project>,
    pub technologies: Vec<TechColor>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProjectsData {
    pub projects: Vec<Project>,
}

/// Query-failure policy for listings: log it, render the page without the
/// entity.
fn or_empty<T>(result: Result<Vec<T>>, entity: &str) -> Vec<T> {
    match result {
        Ok(rows) => rows,
        Err(e) => {
            warn!("Error fetching {}: {:#}", entity, e);
            Vec::new()
        }
    }
}

/// Layout loader: session presence plus shared lookup data for all child
/// routes. The session is only inspected, never required here.
pub async fn layout(db: &SupabaseClient, access_token: Option<&str>) -> LayoutData {
    let is_logged_in = match access_token {
        Some(token) => matches!(db.session(token).await, Ok(Some(_))),
        None => false,
    };

    let technologies = or_empty(
        db.from("technologies")
            .order("name", true)
            .fetch::<TechColor>()
            .await,
        "technologies",
    );

    let tech_colors: HashMap<String, String> = technologies
        .iter()
        .map(|t| (t.name.clone(), t.color.clone()))
        .collect();

    let site = match db
        .from("site_settings")
        .limit(1)
        .fetch::<SiteSettings>()
        .await
    {
        Ok(mut rows) if !rows.is_empty() => Some(rows.remove(0)),
        Ok(_) => None,
        Err(e) => {
            warn!("Error fetching site settings: {:#}", e);
            None
        }
    };

    LayoutData {
        tech_colors,
        technologies,
        is_logged_in,
        site,
    }
}

/// Home loader: the featured subset, in placement order.
pub async fn home(db: &SupabaseClient) -> HomeData {
    let projects = or_empty(
        db.from("projects")
            .eq("featured", true)
            .order("placement", true)
            .fetch::<Project>()
            .await,
        "projects",
    );

    HomeData { projects }
}

/// Projects listing: every project, in placement order.
pub async fn projects(db: &SupabaseClient) -> ProjectsData {
    let projects = or_empty(
        db.from("projects")
            .order("placement", true)
            .fetch::<Project>()
            .await,
        "projects",
    );

    ProjectsData { projects }
}

/// About loader: experience and education fetched concurrently. The two
/// queries are independent failure domains; one failing empties only its
/// own list.
pub async fn about(db: &SupabaseClient) -> AboutData {
    let (experience, education) = futures::join!(
        db.from("experience")
            .order("placement", true)
            .fetch::<Experience>(),
        db.from("education")
            .order("placement", true)
            .fetch::<Education>(),
    );

    AboutData {
        experience: or_empty(experience, "experience"),
        education: or_empty(education, "education"),
    }
}

/// Admin dashboard: top 4 projects by placement plus the full technology
/// list for quick editing. Callers have already passed the session check.
pub async fn admin_dashboard(db: &SupabaseClient, session: &Session) -> AdminDashboardData {
    let top_projects = or_empty(
        db.from("projects")
            .authenticated(session)
            .order("placement", true)
            .limit(4)
            .fetch::<Project>()
            .await,
        "projects",
    );

    let technologies = or_empty(
        db.from("technologies")
            .authenticated(session)
            .order("name", true)
            .fetch::<TechColor>()
            .await,
        "technologies",
    );

    AdminDashboardData {
        top_projects,
        technologies,
    }
}

/// Admin edit loader: a single project by id. Absence (or any query
/// failure) is fatal to the page, not substituted.
pub async fn admin_project(db: &SupabaseClient, session: &Session, id: i64) -> Result<Project> {
    db.from("projects")
        .authenticated(session)
        .eq("id", id)
        .fetch_single::<Project>()
        .await
}

/// Admin projects listing: every project, in placement order.
pub async fn admin_projects(db: &SupabaseClient, session: &Session) -> AdminProjectsData {
    let projects = or_empty(
        db.from("projects")
            .authenticated(session)
            .order("placement", true)
            .fetch::<Project>()
            .await,
        "projects",
    );

    AdminProjectsData { projects }
}
