pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #3B82F6;
  --primary-dark: #2563EB;
  --accent: #8B5CF6;

  /* Light theme surfaces */
  --background: #F9FAFB;
  --surface: #FFFFFF;
  --text-primary: #111827;
  --text-secondary: #4B5563;
  --border: #E5E7EB;
  --shadow: 0 4px 12px rgba(17, 24, 39, 0.08);

  /* Spacing */
  --space-2: 0.5rem;
  --space-4: 1rem;
  --space-8: 2rem;
  --space-16: 4rem;

  --header-height: 70px;
  --radius: 0.75rem;
  --transition: 0.3s ease;
}

/* Dark theme, selected by the data-theme attribute on <html> */
:root[data-theme="dark"] {
  --background: #0F172A;
  --surface: #1E293B;
  --text-primary: #F1F5F9;
  --text-secondary: #94A3B8;
  --border: #334155;
  --shadow: 0 4px 12px rgba(0, 0, 0, 0.4);
}
"#;
