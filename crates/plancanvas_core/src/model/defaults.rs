//! Fixed original content for every canvas section.
//!
//! # Responsibility
//! - Hold the canonical pre-filled text restored by the reset action.
//!
//! # Invariants
//! - These strings never change at runtime; reset restores them verbatim.
//! - The free-notes section has an empty default.

use crate::model::section::SectionId;

const KEY_PARTNERSHIPS_DEFAULT: &str = "Tech Companies: 3 sponsors (₹25,000 each = ₹75,000/year)\n\nUniversities: 5 partnerships for venue access\n\nMentors: 15 industry professionals\n\nPlatforms: Free tools (Canva, GitHub, etc.)";

const KEY_ACTIVITIES_DEFAULT: &str = "Workshops: 12/year (₹2,500 each = ₹30,000)\n\nMentorship: 15 mentors × 2 hours/week × 40 weeks = 1,200 hours\n\nCommunity Events: Monthly meetups (₹1,500 each = ₹18,000/year)\n\nResource Development: Creating templates and guides";

const KEY_RESOURCES_DEFAULT: &str = "Human: 10 volunteers, 15 mentors\n\nDigital: Website, learning platform (₹15,000/year)\n\nPhysical: Co-working space access (₹8,000/month)\n\nFinancial: Starting budget ₹2,50,000";

const VALUE_PROPOSITIONS_DEFAULT: &str = "Free Skill Development: Workshops in entrepreneurship, coding, design\n\nMentorship: 1:10 mentor-student ratio\n\nCommunity: Network of 500+ students and professionals\n\nResources: Access to tools, templates, and guides\n\nVisibility: Showcase projects to 5,000+ people";

const CUSTOMER_RELATIONSHIPS_DEFAULT: &str = "Personal Mentorship: 2 hours/week per student\n\nCommunity Building: WhatsApp groups, Discord server\n\nSelf-Service: Online resource library\n\nCo-Creation: Student-led hackathons and projects";

const CHANNELS_DEFAULT: &str = "Website: 3,000 visitors/month\n\nSocial Media: Instagram (2,000 followers), LinkedIn (1,500)\n\nEvents: 12 workshops, 10 webinars/year\n\nEmail: Bi-weekly newsletters (2,500 subscribers)\n\nCollege Partnerships: Reach 10,000+ students";

const CUSTOMER_SEGMENTS_DEFAULT: &str = "Engineering Students: 60% (est. 1,000 students)\n\nManagement Students: 25% (est. 400 students)\n\nOther Students: 10% (est. 200 students)\n\nYoung Professionals: 5% (est. 100 people)";

const COST_STRUCTURE_DEFAULT: &str = "Fixed Costs: Website hosting ₹12,000/year, Tools ₹8,000/year\n\nVariable Costs: Events ₹30,000, Marketing ₹15,000\n\nTotal Annual Costs: ₹65,000\n\nCost per beneficiary: ₹65 per student";

const REVENUE_STREAMS_DEFAULT: &str = "Corporate Sponsorships: ₹75,000/year\n\nWorkshop Fees: Premium workshops ₹500 × 200 = ₹1,00,000\n\nMembership: Annual membership ₹200 × 100 = ₹20,000\n\nGrants: Government/NGO grants ₹50,000/year\n\nTotal Revenue: ₹2,45,000/year";

/// Returns the fixed original content for one section.
pub(crate) fn default_content(id: SectionId) -> &'static str {
    match id {
        SectionId::KeyPartnerships => KEY_PARTNERSHIPS_DEFAULT,
        SectionId::KeyActivities => KEY_ACTIVITIES_DEFAULT,
        SectionId::KeyResources => KEY_RESOURCES_DEFAULT,
        SectionId::ValuePropositions => VALUE_PROPOSITIONS_DEFAULT,
        SectionId::CustomerRelationships => CUSTOMER_RELATIONSHIPS_DEFAULT,
        SectionId::Channels => CHANNELS_DEFAULT,
        SectionId::CustomerSegments => CUSTOMER_SEGMENTS_DEFAULT,
        SectionId::CostStructure => COST_STRUCTURE_DEFAULT,
        SectionId::RevenueStreams => REVENUE_STREAMS_DEFAULT,
        // Free-notes stays empty even after a full reset.
        SectionId::NotesIdeas => "",
    }
}
