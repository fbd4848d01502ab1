pub const HOME_STYLES: &str = r#"
/* Home */
.hero {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  position: relative;
  overflow: hidden;
}

.hero-backdrop {
  position: absolute;
  inset: 0;
  opacity: 0.3;
  background: linear-gradient(45deg, var(--color-accent), var(--color-primary));
  z-index: 1;
}

.hero-content {
  text-align: center;
  z-index: 2;
  max-width: 800px;
  margin: 0 auto;
}

.hero-title {
  font-size: clamp(3rem, 8vw, 6rem);
  margin-bottom: 1rem;
  letter-spacing: -0.03em;
}

.hero-subtitle {
  font-size: clamp(1rem, 2vw, 1.5rem);
  color: var(--color-text-muted);
  margin-bottom: 3rem;
  font-weight: 300;
}

.scroll-indicator {
  position: absolute;
  bottom: 2rem;
  left: 50%;
  transform: translateX(-50%);
  font-size: 0.8rem;
  text-transform: uppercase;
  letter-spacing: 0.2em;
  color: var(--color-text-muted);
  z-index: 2;
}

.scroll-indicator::after {
  content: '';
  display: block;
  width: 1px;
  height: 40px;
  background: var(--color-text-muted);
  margin: 0.5rem auto 0;
  animation: scroll-hint 2s infinite;
}

@keyframes scroll-hint {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(10px); }
}

.featured {
  padding: 6rem 0;
}

.featured h2 {
  font-size: clamp(1.5rem, 3vw, 2.25rem);
  margin-bottom: 2rem;
}
"#;

pub const ABOUT_STYLES: &str = r#"
/* About */
.about-section {
  min-height: 100vh;
  padding: 8rem 0 4rem;
}

.about-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 4rem;
  align-items: center;
}

.about-content h1 {
  font-size: clamp(2rem, 4vw, 3rem);
  margin-bottom: 2rem;
}

.about-content p {
  font-size: 1.1rem;
  line-height: 1.8;
  color: var(--color-text-muted);
  margin-bottom: 1.5rem;
}

.about-image {
  position: relative;
  overflow: hidden;
}

.about-image img {
  width: 100%;
  height: auto;
  filter: grayscale(100%);
  transition: var(--transition);
}

.about-image:hover img {
  filter: grayscale(0%);
}

.skills {
  margin-top: 3rem;
}

.skills h3 {
  font-size: 1.5rem;
  margin-bottom: 1rem;
}

.skills-list {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
}

.skill {
  display: inline-block;
  padding: 0.5rem 1rem;
  border: 1px solid var(--color-text-muted);
  font-size: 0.9rem;
  transition: var(--transition);
}

.skill:hover {
  border-color: var(--color-accent);
  color: var(--color-accent);
}

@media (max-width: 768px) {
  .about-grid {
    grid-template-columns: 1fr;
    gap: 2rem;
  }
}
"#;

pub const PORTFOLIO_STYLES: &str = r#"
/* Portfolio listing */
.portfolio-section {
  min-height: 100vh;
  padding: 8rem 0 4rem;
}

.page-header {
  text-align: center;
  margin-bottom: 4rem;
}

.page-header h1 {
  font-size: clamp(2rem, 4vw, 3rem);
  margin-bottom: 1rem;
}

.page-header p {
  font-size: 1.2rem;
  color: var(--color-text-muted);
}

.filter-buttons {
  display: flex;
  justify-content: center;
  gap: 1rem;
  margin-bottom: 3rem;
  flex-wrap: wrap;
}

.filter-button {
  padding: 0.5rem 1.5rem;
  background: transparent;
  color: var(--color-text);
  border: 1px solid var(--color-text-muted);
  cursor: pointer;
  transition: var(--transition);
  text-transform: uppercase;
  font-size: 0.9rem;
  letter-spacing: 0.1em;
}

.filter-button.active,
.filter-button:hover {
  background: var(--color-accent);
  border-color: var(--color-accent);
  color: white;
}

.project-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(350px, 1fr));
  gap: 2rem;
}

.project-card {
  display: block;
  position: relative;
  overflow: hidden;
  background: var(--color-surface);
  cursor: pointer;
  transition: transform 0.3s ease;
}

.project-card:hover {
  transform: translateY(-10px);
}

.project-image {
  position: relative;
  padding-bottom: 66.67%;
  overflow: hidden;
}

.project-image img {
  position: absolute;
  top: 0;
  left: 0;
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform 0.6s ease;
}

.project-card:hover .project-image img {
  transform: scale(1.1);
}

.project-overlay {
  position: absolute;
  inset: 0;
  background: var(--color-overlay);
  display: flex;
  flex-direction: column;
  justify-content: center;
  align-items: center;
  opacity: 0;
  transition: opacity 0.3s ease;
  padding: 2rem;
  text-align: center;
}

.project-card:hover .project-overlay {
  opacity: 1;
}

.project-overlay h3 {
  font-size: 1.5rem;
  margin-bottom: 0.5rem;
}

.project-overlay p {
  color: var(--color-text-muted);
  margin-bottom: 1rem;
}

.category-tag {
  color: var(--color-accent);
  text-transform: uppercase;
  font-size: 0.8rem;
  letter-spacing: 0.1em;
}

.empty-state {
  text-align: center;
  padding: 4rem 0;
  color: var(--color-text-muted);
}

/* Project detail */
.project-detail {
  min-height: 100vh;
  padding: 8rem 0 4rem;
}

.breadcrumb {
  margin-bottom: 2rem;
  color: var(--color-text-muted);
  font-size: 0.9rem;
}

.breadcrumb a:hover {
  color: var(--color-accent);
}

.project-detail h1 {
  font-size: clamp(2.5rem, 6vw, 4.5rem);
  margin: 0.5rem 0 1.5rem;
}

.project-detail .lead {
  font-size: 1.25rem;
  color: var(--color-text-muted);
  margin-bottom: 3rem;
}

.project-hero-image {
  width: 100%;
  margin-bottom: 3rem;
}

.project-pager {
  display: flex;
  justify-content: space-between;
  gap: 2rem;
  border-top: 1px solid var(--color-surface);
  padding-top: 2rem;
}

.project-pager a {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
}

.project-pager a:hover strong {
  color: var(--color-accent);
}

.project-pager .next {
  text-align: right;
}

.project-pager small {
  color: var(--color-text-muted);
  text-transform: uppercase;
  letter-spacing: 0.1em;
}

/* Not found */
.error-state {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1.5rem;
  text-align: center;
}

.error-state h1 {
  font-size: clamp(2rem, 5vw, 3.5rem);
}

.error-state p {
  color: var(--color-text-muted);
}
"#;

pub const CONTACT_STYLES: &str = r#"
/* Contact */
.contact-section {
  min-height: 100vh;
  padding: 8rem 0 4rem;
}

.contact-grid {
  display: grid;
  grid-template-columns: 1fr 1.5fr;
  gap: 4rem;
}

.contact-details h2 {
  font-size: 1.5rem;
  margin-bottom: 1rem;
}

.contact-details p,
.contact-details li {
  color: var(--color-text-muted);
  margin-bottom: 0.75rem;
}

.contact-details ul {
  list-style: none;
}

.contact-details a:hover {
  color: var(--color-accent);
}

.contact-form {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.contact-form label {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  text-transform: uppercase;
  font-size: 0.8rem;
  letter-spacing: 0.1em;
  color: var(--color-text-muted);
}

.contact-form input,
.contact-form textarea {
  background: var(--color-surface);
  border: 1px solid transparent;
  color: var(--color-text);
  padding: 1rem;
  font: inherit;
  font-size: 1rem;
  text-transform: none;
  letter-spacing: normal;
}

.contact-form input:focus,
.contact-form textarea:focus {
  outline: none;
  border-color: var(--color-accent);
}

.contact-form textarea {
  min-height: 180px;
  resize: vertical;
}

.form-error {
  color: var(--color-error);
}

.form-sent {
  padding: 2rem;
  background: var(--color-surface);
  border-left: 3px solid var(--color-accent);
}

@media (max-width: 768px) {
  .contact-grid {
    grid-template-columns: 1fr;
    gap: 2rem;
  }
}
"#;
