//! Fixed instruction prompt

/// System message framing the backend
pub const SYSTEM_PROMPT: &str = "You are an expert full-stack developer who generates complete, production-ready web applications.";

/// Field names the reply object must carry
pub const REPLY_FIELDS: [&str; 5] = [
    "app_name",
    "frontend_code",
    "backend_code",
    "database_schema",
    "deploy_instructions",
];

/// Build the user message for `idea`
#[must_use]
pub fn build_prompt(idea: &str) -> String {
    format!(
        r#"Generate a complete full-stack web application for this idea: "{idea}"

Return a single JSON object with exactly these fields:
- app_name: A PascalCase name for the app
- frontend_code: Complete React + Vite app code as one string. Start the main component with the line
  ===== src/App.jsx =====
  and the stylesheet with the line
  ===== src/index.css =====
  The component must be a function named App. Any other file starts with a line of the form ===== <path> =====
- backend_code: Complete FastAPI Python code with all routes
- database_schema: Supabase PostgreSQL schema with tables
- deploy_instructions: Step-by-step deployment guide for Netlify + Render + Supabase

Make the code production-ready, well-commented, and include modern UI styling similar to Cursor/Windsurf dark theme.
Reply with the JSON object only, inside a ```json fenced block."#
    )
}
