use stormshift_core_contact_impl::ContactFeatureServiceImpl;
use stormshift_core_health_impl::HealthFeatureServiceImpl;
use stormshift_email_impl::{template::TemplateEmailServiceImpl, EmailServiceImpl};
use stormshift_shared_impl::time::TimeServiceImpl;
use stormshift_templates_impl::TemplateServiceImpl;

// API
pub type RestServer = stormshift_api_rest::RestServer<HealthFeature, ContactFeature>;

// Email
pub type Email = EmailServiceImpl;
pub type TemplateEmail = TemplateEmailServiceImpl<Email, Template>;

// Template
pub type Template = TemplateServiceImpl;

// Shared
pub type Time = TimeServiceImpl;

// Core
pub type HealthFeature = HealthFeatureServiceImpl<Time, Email>;

pub type ContactFeature = ContactFeatureServiceImpl<TemplateEmail>;
