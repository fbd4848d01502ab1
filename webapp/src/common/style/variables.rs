pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --color-primary: #0a0a0a;     /* Page background */
  --color-surface: #1a1a1a;     /* Cards and panels */
  --color-text: #f5f5f5;
  --color-text-muted: #9a9a9a;
  --color-accent: #ff4444;      /* Highlights, active links, CTAs */
  --color-accent-light: #ff6666;
  --color-overlay: rgba(0, 0, 0, 0.8);
  --color-nav-scrolled: rgba(10, 10, 10, 0.95);
  --color-error: #ff7a7a;

  /* Typography */
  --font-body: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
  --font-display: 'Playfair Display', Georgia, serif;

  /* Layout */
  --container-width: 1200px;
  --nav-height: 96px;
  --mobile-breakpoint: 768px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;
  --space-16: 64px;

  /* Animation */
  --transition: all 0.3s ease;
  --page-exit: 300ms;
  --page-enter: 600ms;
  --easing-out: cubic-bezier(0.0, 0.0, 0.2, 1);
}"#;
