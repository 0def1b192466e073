//! The fixed file contents the wizard writes.
//!
//! These are constants, not a templating system: the wizard's job is to lay
//! down exactly these bytes. Anything fancier (variable substitution, user
//! templates) is explicitly out of scope.

/// FastAPI entry point written to `backend/main.py`.
///
/// One GET endpoint at `/api/hello` plus a wide-open CORS policy so the Vite
/// dev server can call it before the proxy rewrite kicks in.
pub const BACKEND_MAIN: &str = r#"from fastapi import FastAPI
from fastapi.middleware.cors import CORSMiddleware

app = FastAPI()

app.add_middleware(
    CORSMiddleware,
    allow_origins=["*"],
    allow_credentials=True,
    allow_methods=["*"],
    allow_headers=["*"],
)

@app.get("/api/hello")
def read_root():
    return {"message": "Hello from FastAPI backend"}
"#;

/// Dependency manifest written to `backend/requirements.txt`.
pub const BACKEND_REQUIREMENTS: &str = "fastapi\nuvicorn\n";

/// React component written over the frontend's `App.jsx` / `App.tsx`.
///
/// On mount it fetches the backend hello endpoint and renders the `message`
/// field, falling back to a reachability notice if the request fails.
pub const APP_ENTRY: &str = r#"import { useEffect, useState } from 'react'

function App() {
  const [message, setMessage] = useState('Connecting to backend...')

  useEffect(() => {
    fetch('http://localhost:8000/api/hello')
      .then(res => res.json())
      .then(data => setMessage(data.message))
      .catch(() => setMessage('Backend not reachable'))
  }, [])

  return (
    <div style={{
      display: 'flex',
      flexDirection: 'column',
      alignItems: 'center',
      justifyContent: 'center',
      height: '100vh',
      fontFamily: 'sans-serif'
    }}>
      <h1>FastAPI + React</h1>
      <p>{message}</p>
    </div>
  )
}

export default App
"#;

/// Vite config written over `vite.config.ts` / `vite.config.js`: React plugin
/// plus a dev-server proxy forwarding `/api` to the backend.
pub const VITE_CONFIG: &str = r#"import { defineConfig } from 'vite'
import react from '@vitejs/plugin-react'

export default defineConfig({
  plugins: [react()],
  server: {
    proxy: {
      '/api': 'http://localhost:8000',
    },
  },
})
"#;

/// Port the generated backend listens on (`uvicorn` default).
pub const BACKEND_PORT: u16 = 8000;

/// Port the Vite dev server listens on.
pub const FRONTEND_PORT: u16 = 5173;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requirements_has_exactly_two_dependency_lines() {
        let lines: Vec<&str> = BACKEND_REQUIREMENTS
            .lines()
            .filter(|l| !l.trim().is_empty())
            .collect();
        assert_eq!(lines, vec!["fastapi", "uvicorn"]);
    }

    #[test]
    fn backend_main_serves_the_hello_endpoint() {
        assert!(BACKEND_MAIN.contains("@app.get(\"/api/hello\")"));
        assert!(BACKEND_MAIN.contains("Hello from FastAPI backend"));
    }

    #[test]
    fn backend_main_allows_all_origins() {
        assert!(BACKEND_MAIN.contains("allow_origins=[\"*\"]"));
        assert!(BACKEND_MAIN.contains("allow_credentials=True"));
        assert!(BACKEND_MAIN.contains("allow_methods=[\"*\"]"));
        assert!(BACKEND_MAIN.contains("allow_headers=[\"*\"]"));
    }

    #[test]
    fn app_entry_calls_the_backend_and_has_a_fallback() {
        assert!(APP_ENTRY.contains("fetch('http://localhost:8000/api/hello')"));
        assert!(APP_ENTRY.contains("setMessage(data.message)"));
        assert!(APP_ENTRY.contains("Backend not reachable"));
    }

    #[test]
    fn vite_config_proxies_api_to_backend() {
        assert!(VITE_CONFIG.contains("'/api': 'http://localhost:8000'"));
        assert!(VITE_CONFIG.contains("plugins: [react()]"));
    }

    #[test]
    fn templates_end_with_a_newline() {
        for t in [BACKEND_MAIN, BACKEND_REQUIREMENTS, APP_ENTRY, VITE_CONFIG] {
            assert!(t.ends_with('\n'));
        }
    }
}
