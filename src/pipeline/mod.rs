pub mod extraction;
pub mod report;
pub mod prediction;
pub mod processor; // bytes → text → record → (optional) verdict
pub mod diagnostic; // Intermediate artifact dump (HEALTH_SUPPORT_DUMP_DIR)
