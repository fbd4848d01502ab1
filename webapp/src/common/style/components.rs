pub const BASE_COMPONENTS: &str = r#"
/* Layout */
.container {
  width: 100%;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-8);
}

/* Buttons */
.btn {
  display: inline-block;
  padding: 1rem 3rem;
  font-weight: 600;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  border: none;
  cursor: pointer;
  transition: var(--transition);
}

.btn-primary {
  background: var(--color-accent);
  color: white;
}

.btn-primary:hover {
  background: var(--color-accent-light);
  transform: translateY(-2px);
  text-decoration: none;
}

.btn-outline {
  background: transparent;
  color: var(--color-text);
  border: 1px solid var(--color-text-muted);
}

.btn-outline:hover {
  border-color: var(--color-accent);
  color: var(--color-accent);
  text-decoration: none;
}

/* Navigation */
.site-nav {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 1000;
  padding: 2rem 0;
  background: transparent;
  backdrop-filter: none;
  transition: var(--transition);
}

.site-nav.scrolled {
  background: var(--color-nav-scrolled);
  backdrop-filter: blur(10px);
}

.nav-container {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.logo {
  font-family: var(--font-display);
  font-size: 1.5rem;
  font-weight: 700;
  letter-spacing: -0.02em;
  color: var(--color-text);
}

.logo span {
  color: var(--color-accent);
}

.nav-links {
  display: flex;
  gap: 3rem;
}

.nav-link {
  font-size: 0.9rem;
  font-weight: 500;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  position: relative;
  color: var(--color-text);
}

.nav-link::after {
  content: '';
  position: absolute;
  bottom: -5px;
  left: 0;
  width: 0;
  height: 2px;
  background: var(--color-accent);
  transition: var(--transition);
}

.nav-link.active::after,
.nav-link:hover::after {
  width: 100%;
}

.menu-button {
  display: none;
  background: none;
  border: none;
  color: var(--color-text);
  font-size: 1.5rem;
  cursor: pointer;
}

.mobile-menu {
  position: fixed;
  top: 0;
  right: 0;
  width: 100%;
  height: 100vh;
  background: var(--color-primary);
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 2rem;
  z-index: 999;
  animation: slide-in 0.3s ease-out;
}

.mobile-menu .nav-link {
  font-size: 1.5rem;
}

@keyframes slide-in {
  from { transform: translateX(100%); }
  to { transform: translateX(0); }
}

@media (max-width: 768px) {
  .nav-links {
    display: none;
  }

  .menu-button {
    display: block;
    z-index: 1001;
  }
}

/* Page transitions */
.page {
  min-height: 100vh;
}

.page-exit {
  animation: page-exit var(--page-exit) ease-in forwards;
}

.page-hidden {
  opacity: 0;
}

.page-enter {
  animation: page-enter var(--page-enter) var(--easing-out);
}

@keyframes page-exit {
  from { opacity: 1; }
  to { opacity: 0; }
}

@keyframes page-enter {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

/* Staggered reveal, delay set inline per item */
.reveal {
  opacity: 0;
  animation: reveal 0.6s var(--easing-out) forwards;
}

@keyframes reveal {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

/* Footer */
.site-footer {
  padding: var(--space-8) 0;
  border-top: 1px solid var(--color-surface);
  color: var(--color-text-muted);
  font-size: 0.85rem;
  text-align: center;
}
"#;
