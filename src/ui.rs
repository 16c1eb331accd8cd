use crate::like::{ButtonState, LOADING_MESSAGE};

pub fn render_index(button: ButtonState) -> String {
    let liked = button.is_liked();
    let disabled = button != ButtonState::Idle;
    INDEX_HTML
        .replace("{{BUTTON_STATE}}", button.as_str())
        .replace("{{BUTTON_CLASS}}", if liked { " liked" } else { "" })
        .replace("{{BUTTON_DISABLED}}", if disabled { " disabled" } else { "" })
        .replace("{{ARIA_PRESSED}}", if liked { "true" } else { "false" })
        .replace("{{ICON_STYLE}}", if liked { "fa-solid" } else { "fa-regular" })
        .replace("{{COUNT_MESSAGE}}", LOADING_MESSAGE)
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="zh-CN">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>点赞</title>
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css" />
  <script src="https://cdn.jsdelivr.net/npm/canvas-confetti@1.9.3/dist/confetti.browser.min.js" defer></script>
  <style>
    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .about-like {
      width: min(420px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 18px;
      justify-items: center;
      text-align: center;
      animation: rise 600ms ease;
    }

    .about-like-button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 16px 28px;
      font-size: 1.05rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(255, 107, 74, 0.3);
      transition: transform 150ms ease, box-shadow 150ms ease, background 150ms ease;
      display: inline-flex;
      align-items: center;
      justify-content: center;
      gap: 10px;
    }

    .about-like-button:active {
      transform: scale(0.98);
    }

    .about-like-button:disabled {
      cursor: default;
      transform: none;
    }

    .about-like-button[data-state="pending"] {
      opacity: 0.7;
    }

    .about-like-button.liked {
      background: var(--accent-2);
      box-shadow: 0 10px 24px rgba(47, 72, 88, 0.3);
    }

    .about-like-count {
      margin: 0;
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .about-like-count[data-state="error"] {
      color: #c63b2b;
    }

    .about-like-count[data-state="success"] {
      color: #2d7a4b;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }
  </style>
</head>
<body>
  <section id="about-like-section" class="about-like" data-like-service="">
    <button id="about-like-button" class="about-like-button{{BUTTON_CLASS}}" type="button"
      data-state="{{BUTTON_STATE}}" aria-pressed="{{ARIA_PRESSED}}"{{BUTTON_DISABLED}}>
      <span class="about-like-button__icon"><i class="{{ICON_STYLE}} fa-thumbs-up" aria-hidden="true"></i></span>
      <span class="about-like-button__label">点赞</span>
    </button>
    <p id="about-like-count" class="about-like-count" data-state="loading">{{COUNT_MESSAGE}}</p>
  </section>

  <script>
    const section = document.getElementById('about-like-section');
    const button = document.getElementById('about-like-button');
    const countEl = document.getElementById('about-like-count');
    const iconEl = button.querySelector('.about-like-button__icon i');
    const storageKey = 'about-like-liked';

    const setCountMessage = (message, state) => {
      countEl.textContent = message;
      if (state) {
        countEl.dataset.state = state;
      } else {
        countEl.removeAttribute('data-state');
      }
    };

    const setButtonState = (liked) => {
      button.classList.toggle('liked', liked);
      button.disabled = liked;
      button.setAttribute('aria-pressed', liked ? 'true' : 'false');
      button.dataset.state = liked ? 'liked' : 'idle';

      if (iconEl) {
        iconEl.className = `${liked ? 'fa-solid' : 'fa-regular'} fa-thumbs-up`;
        iconEl.setAttribute('aria-hidden', 'true');
      }
    };

    const triggerConfetti = () => {
      if (typeof window.confetti !== 'function') {
        return;
      }

      if (window.matchMedia && window.matchMedia('(prefers-reduced-motion: reduce)').matches) {
        return;
      }

      const rect = button.getBoundingClientRect();
      const originX = (rect.left + rect.width / 2) / (window.innerWidth || 1);
      const originY = (rect.top + rect.height / 2) / (window.innerHeight || 1);
      const colors = ['#f472b6', '#38bdf8', '#facc15', '#f97316', '#a855f7', '#4ade80'];
      const defaults = {
        startVelocity: 36,
        gravity: 0.92,
        ticks: 120,
        zIndex: 1000,
      };

      window.confetti({
        ...defaults,
        particleCount: 55,
        spread: 70,
        origin: { x: originX, y: originY },
        colors,
      });

      window.confetti({
        ...defaults,
        particleCount: 45,
        spread: 120,
        decay: 0.92,
        scalar: 0.85,
        origin: { x: originX, y: Math.max(originY - 0.05, 0) },
        colors,
      });
    };

    const applyStatus = (data) => {
      if (data.service) {
        section.dataset.likeService = data.service;
      }
      setCountMessage(data.message, data.state);
      if (data.liked) {
        setButtonState(true);
      }
    };

    const loadStatus = async () => {
      try {
        const res = await fetch('/api/like', { cache: 'no-store' });
        if (!res.ok) {
          throw new Error(`status request failed with status ${res.status}`);
        }
        applyStatus(await res.json());
      } catch (error) {
        console.error('Unable to load like count:', error);
        setCountMessage('点赞服务暂时不可用', 'error');
      }
    };

    button.addEventListener('click', async () => {
      if (button.disabled) {
        return;
      }

      button.disabled = true;
      button.dataset.state = 'pending';

      try {
        const res = await fetch('/api/like', { method: 'POST', cache: 'no-store' });
        if (!res.ok) {
          throw new Error((await res.text()) || '点赞失败，请稍后再试');
        }
        const data = await res.json();
        applyStatus(data);
        setButtonState(true);

        try {
          localStorage.setItem(storageKey, 'true');
        } catch (storageError) {
          console.warn('Unable to persist like preference:', storageError);
        }

        if (data.celebrate) {
          triggerConfetti();
        }
      } catch (error) {
        console.error('Unable to record like:', error);
        setButtonState(false);
        setCountMessage(error.message || '点赞失败，请稍后再试', 'error');
      }
    });

    let storedPreference = null;
    try {
      storedPreference = localStorage.getItem(storageKey);
    } catch (storageError) {
      console.warn('Local storage is not accessible:', storageError);
    }

    if (storedPreference === 'true') {
      setButtonState(true);
    }

    loadStatus();
  </script>
</body>
</html>
"##;
