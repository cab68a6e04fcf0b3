//! The literal datasets the dashboard ships with.
//!
//! These back the listing commands when no payload is given and double as
//! test data for every preset.

use console_core::RecordId;
use console_search::Filter;

use crate::extension::Extension;
use crate::project::{DoraMetrics, Project, ProjectStatus, QualityScores, Tier};
use crate::service::{Health, Maturity, Service};
use crate::template::Template;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// Templates
// ============================================================================

#[allow(clippy::too_many_arguments)]
fn template(
    id: u32,
    name: &str,
    description: &str,
    category: &str,
    downloads: u32,
    rating: f64,
    features: &[&str],
    estimated_cost: &str,
) -> Template {
    Template {
        id,
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        downloads,
        rating,
        features: strings(features),
        estimated_cost: estimated_cost.to_string(),
    }
}

/// The template marketplace.
pub fn templates() -> Vec<Template> {
    vec![
        template(
            1,
            "Insurance Claims ML Pipeline",
            "End-to-end ML pipeline for automated claims processing with fraud detection, NLP analysis, and compliance tracking",
            "Machine Learning",
            142,
            4.8,
            &["Auto-scaling", "SOC 2 Compliant", "CI/CD Ready", "Cost Optimized"],
            "$8-12k/mo",
        ),
        template(
            2,
            "Customer Analytics Platform",
            "Real-time customer segmentation and behavioral analysis with GDPR-compliant data handling and visualization",
            "Analytics",
            98,
            4.6,
            &[
                "Real-time Processing",
                "Privacy Controls",
                "Dashboard Included",
                "Multi-source Integration",
            ],
            "$5-8k/mo",
        ),
        template(
            3,
            "Secure Data Lake",
            "Enterprise data lake with row-level security, audit logging, and automated compliance reporting for financial services",
            "Data Engineering",
            87,
            4.9,
            &["RLS Enabled", "Audit Trails", "Encryption at Rest", "NIST Compliant"],
            "$10-15k/mo",
        ),
        template(
            4,
            "Risk Assessment API",
            "Microservices architecture for real-time risk scoring with A/B testing framework and performance monitoring",
            "API Services",
            76,
            4.7,
            &[
                "Load Balanced",
                "Zero-trust Auth",
                "Observability Built-in",
                "Blue-Green Deploy",
            ],
            "$6-9k/mo",
        ),
        template(
            5,
            "Compliance Monitoring System",
            "Automated compliance tracking and reporting system with policy-as-code enforcement and audit trail generation",
            "Governance",
            54,
            4.5,
            &[
                "Policy Automation",
                "SOC 2 & NIST Ready",
                "Continuous Scanning",
                "Automated Remediation",
            ],
            "$4-6k/mo",
        ),
        template(
            6,
            "AI-Powered Chatbot Platform",
            "Customer service chatbot with NLU, sentiment analysis, and integration to CRM systems",
            "AI/ML",
            121,
            4.8,
            &[
                "Multi-language",
                "Analytics Dashboard",
                "CRM Integration",
                "24/7 Availability",
            ],
            "$7-11k/mo",
        ),
    ]
}

/// Category tags of the template marketplace, with their fixed counts.
pub fn template_filters() -> Vec<Filter> {
    let mut filters = vec![Filter::new("All").with_count(6)];
    filters.extend(
        [
            "Machine Learning",
            "Analytics",
            "Data Engineering",
            "API Services",
            "Governance",
            "AI/ML",
        ]
        .into_iter()
        .map(|id| Filter::new(id).with_count(1)),
    );
    filters
}

// ============================================================================
// Extensions
// ============================================================================

#[allow(clippy::too_many_arguments)]
fn extension(
    id: u32,
    name: &str,
    description: &str,
    category: &str,
    downloads: u32,
    rating: f64,
    installed: bool,
    developer: &str,
    version: &str,
) -> Extension {
    Extension {
        id,
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        downloads,
        rating,
        installed,
        developer: developer.to_string(),
        version: version.to_string(),
    }
}

/// The extensions marketplace.
pub fn extensions() -> Vec<Extension> {
    vec![
        extension(
            1,
            "Advanced Security Scanner",
            "Enhanced SAST/DAST scanning with AI-powered vulnerability detection and remediation suggestions",
            "Security",
            234,
            4.9,
            true,
            "Platform Team",
            "2.3.0",
        ),
        extension(
            2,
            "Custom Deployment Targets",
            "Deploy to specialized infrastructure including mainframe bridges and legacy systems",
            "Deployment",
            156,
            4.7,
            false,
            "Integration Team",
            "1.8.2",
        ),
        extension(
            3,
            "AI Code Assistant",
            "Context-aware code completion and generation with Allstate compliance checks built-in",
            "AI/ML",
            412,
            4.8,
            true,
            "AI Team",
            "3.1.0",
        ),
        extension(
            4,
            "Database Performance Analyzer",
            "Real-time query optimization and performance tuning recommendations for all database types",
            "Database",
            189,
            4.6,
            false,
            "Data Engineering",
            "1.5.4",
        ),
        extension(
            5,
            "Custom Audit Logger",
            "Extended audit trail capabilities with custom compliance report generation",
            "Governance",
            143,
            4.5,
            true,
            "Compliance Team",
            "2.0.1",
        ),
        extension(
            6,
            "API Gateway Extension",
            "Advanced API management with custom routing, rate limiting, and analytics",
            "API",
            267,
            4.8,
            false,
            "Platform Team",
            "2.4.0",
        ),
    ]
}

// ============================================================================
// Projects
// ============================================================================

/// Analytics environments with scorecards and cost tracking.
pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            name: "analytics-ml-prod".to_string(),
            description: "Production ML pipeline for claims processing".to_string(),
            status: ProjectStatus::Active,
            tier: Tier::Gold,
            team: "Data Science".to_string(),
            last_deploy: "2 hours ago".to_string(),
            cost: 12450,
            budget: 15000,
            forecast: 13200,
            savings: 1800,
            scores: QualityScores {
                security: 95,
                quality: 92,
                performance: 88,
                compliance: 96,
            },
            dora: DoraMetrics {
                deployment_frequency: "12/day".to_string(),
                lead_time: "45m".to_string(),
                mttr: "1.2h".to_string(),
                change_failure_rate: "2.1%".to_string(),
            },
        },
        Project {
            id: 2,
            name: "customer-insights-dev".to_string(),
            description: "Customer analytics and segmentation platform".to_string(),
            status: ProjectStatus::Active,
            tier: Tier::Silver,
            team: "Analytics".to_string(),
            last_deploy: "1 day ago".to_string(),
            cost: 8200,
            budget: 10000,
            forecast: 8900,
            savings: 1100,
            scores: QualityScores {
                security: 88,
                quality: 85,
                performance: 90,
                compliance: 87,
            },
            dora: DoraMetrics {
                deployment_frequency: "8/day".to_string(),
                lead_time: "1.2h".to_string(),
                mttr: "2.5h".to_string(),
                change_failure_rate: "4.3%".to_string(),
            },
        },
        Project {
            id: 3,
            name: "risk-assessment-staging".to_string(),
            description: "Risk modeling and assessment tools".to_string(),
            status: ProjectStatus::Pending,
            tier: Tier::Bronze,
            team: "Risk Engineering".to_string(),
            last_deploy: "3 days ago".to_string(),
            cost: 5600,
            budget: 8000,
            forecast: 6100,
            savings: 900,
            scores: QualityScores {
                security: 78,
                quality: 75,
                performance: 82,
                compliance: 80,
            },
            dora: DoraMetrics {
                deployment_frequency: "4/day".to_string(),
                lead_time: "2.8h".to_string(),
                mttr: "4.1h".to_string(),
                change_failure_rate: "7.2%".to_string(),
            },
        },
    ]
}

// ============================================================================
// Services
// ============================================================================

#[allow(clippy::too_many_arguments)]
fn service(
    id: i64,
    name: &str,
    description: &str,
    owner: &str,
    maturity: Maturity,
    version: &str,
    dependencies: u32,
    consumers: u32,
    health: Health,
    api_docs: bool,
    slo: f64,
) -> Service {
    Service {
        id: RecordId::Number(id),
        name: name.to_string(),
        description: Some(description.to_string()),
        owner: Some(owner.to_string()),
        maturity: Some(maturity),
        version: Some(version.to_string()),
        dependencies: Some(dependencies),
        consumers: Some(consumers),
        health: Some(health),
        api_docs: Some(api_docs),
        slo: Some(slo),
    }
}

/// The service catalog.
pub fn services() -> Vec<Service> {
    vec![
        service(
            1,
            "Claims Processing API",
            "Automated claims intake, validation, and routing service",
            "Platform Team",
            Maturity::Production,
            "v2.4.1",
            3,
            12,
            Health::Healthy,
            true,
            99.95,
        ),
        service(
            2,
            "Customer Data Service",
            "Centralized customer profile and history management",
            "Data Team",
            Maturity::Stable,
            "v3.1.0",
            5,
            24,
            Health::Healthy,
            true,
            99.9,
        ),
        service(
            3,
            "Risk Scoring Engine",
            "ML-based risk assessment and fraud detection",
            "ML Team",
            Maturity::Beta,
            "v1.2.0-beta",
            8,
            6,
            Health::Warning,
            true,
            99.5,
        ),
        service(
            4,
            "Policy Management System",
            "Insurance policy lifecycle and document management",
            "Policy Team",
            Maturity::Production,
            "v4.0.2",
            4,
            18,
            Health::Healthy,
            true,
            99.99,
        ),
        service(
            5,
            "Payment Gateway Integration",
            "Secure payment processing and transaction management",
            "Platform Team",
            Maturity::Production,
            "v2.8.3",
            2,
            32,
            Health::Healthy,
            true,
            99.95,
        ),
        service(
            6,
            "Document Analysis Service",
            "OCR and document classification for claims processing",
            "AI Team",
            Maturity::Deprecated,
            "v1.5.4",
            6,
            4,
            Health::Warning,
            false,
            99.0,
        ),
    ]
}

// ============================================================================
// Tests
// ============================================================================
