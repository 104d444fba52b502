pub fn render_index() -> &'static str {
    INDEX_HTML
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Culture Pulse</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef1fb;
      --bg-2: #dcd6f7;
      --ink: #2b2a33;
      --accent: #6366f1;
      --accent-2: #2f4858;
      --danger: #e11d48;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #f3efff 60%, #f6f4fb 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
      margin: 0;
    }

    .subtitle {
      margin: 4px 0 0;
      color: #5f5c6e;
      font-size: 0.95rem;
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
    }

    .tab {
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 8px 16px;
      font-size: 0.9rem;
      font-weight: 600;
      color: #6b6478;
      cursor: pointer;
    }

    .tab.active {
      background: white;
      color: var(--accent);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    .card {
      background: white;
      border-radius: 20px;
      padding: 24px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 18px;
    }

    .card h2 {
      margin: 0;
      font-size: 1.3rem;
    }

    .mood-row {
      display: grid;
      grid-template-columns: repeat(5, 1fr);
      gap: 10px;
    }

    .mood-btn {
      border: 2px solid transparent;
      border-radius: 16px;
      background: #f4f2fa;
      padding: 14px 6px;
      font-size: 1.8rem;
      cursor: pointer;
      display: grid;
      justify-items: center;
      gap: 4px;
      transition: transform 150ms ease, border-color 150ms ease;
    }

    .mood-btn span {
      font-size: 0.75rem;
      font-weight: 600;
      color: #6b6478;
    }

    .mood-btn:hover {
      transform: scale(1.04);
    }

    .mood-btn.selected {
      border-color: var(--accent);
      background: white;
      transform: scale(1.08);
    }

    textarea {
      width: 100%;
      min-height: 110px;
      border: 1px solid rgba(47, 72, 88, 0.16);
      border-radius: 16px;
      padding: 14px;
      font-family: inherit;
      font-size: 0.95rem;
      resize: vertical;
    }

    button.primary {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 16px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(99, 102, 241, 0.3);
      transition: transform 150ms ease;
    }

    button.primary:active {
      transform: scale(0.98);
    }

    button.primary:disabled {
      background: #c7c4d6;
      box-shadow: none;
      cursor: not-allowed;
    }

    button.secondary {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      background: rgba(47, 72, 88, 0.08);
      color: var(--accent-2);
    }

    .hidden {
      display: none;
    }

    .thanks {
      text-align: center;
      display: grid;
      gap: 14px;
      justify-items: center;
      padding: 12px 0;
    }

    .thanks .badge {
      width: 72px;
      height: 72px;
      border-radius: 50%;
      background: #def7e7;
      display: grid;
      place-items: center;
      font-size: 2rem;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
      text-align: center;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b8599;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    #chart {
      width: 100%;
      height: 260px;
      display: block;
    }

    #chart text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .chart-grid {
      stroke: rgba(47, 72, 88, 0.12);
    }

    .chart-label {
      fill: #7a7489;
      font-size: 12px;
    }

    .magic {
      appearance: none;
      border: none;
      border-radius: 20px;
      width: 100%;
      padding: 18px;
      font-size: 1.05rem;
      font-weight: 700;
      color: white;
      cursor: pointer;
      background: linear-gradient(90deg, #6366f1, #a855f7, #ec4899);
      box-shadow: 0 14px 30px rgba(168, 85, 247, 0.3);
      transition: transform 150ms ease;
    }

    .magic:hover:enabled {
      transform: scale(1.01);
    }

    .magic:disabled {
      background: #c7c4d6;
      box-shadow: none;
      cursor: not-allowed;
    }

    .plan-list {
      margin: 0;
      padding-left: 0;
      list-style: none;
      display: grid;
      gap: 14px;
      counter-reset: plan;
    }

    .plan-list li {
      display: flex;
      align-items: flex-start;
      gap: 12px;
      line-height: 1.5;
    }

    .plan-list li::before {
      counter-increment: plan;
      content: counter(plan);
      flex-shrink: 0;
      width: 28px;
      height: 28px;
      border-radius: 50%;
      background: #ede9fe;
      color: #7c3aed;
      font-weight: 700;
      font-size: 0.85rem;
      display: grid;
      place-items: center;
    }

    .feed {
      display: grid;
      gap: 12px;
    }

    .feed-empty {
      color: #8b8599;
      text-align: center;
      font-style: italic;
      padding: 24px 0;
    }

    .entry {
      background: #f7f6fb;
      border: 1px solid rgba(47, 72, 88, 0.08);
      border-radius: 16px;
      padding: 14px;
      display: grid;
      gap: 8px;
    }

    .entry .meta {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 10px;
    }

    .entry .when {
      font-size: 0.8rem;
      font-weight: 700;
      color: #8b8599;
    }

    .entry .badge {
      font-size: 0.7rem;
      font-weight: 700;
      text-transform: uppercase;
      padding: 2px 8px;
      border-radius: 8px;
      background: rgba(47, 72, 88, 0.1);
      color: #4b4660;
    }

    .entry .badge.good {
      background: #def7e7;
      color: #15803d;
    }

    .entry .badge.bad {
      background: #fde3e8;
      color: #be123c;
    }

    .entry .comment {
      margin: 0;
      font-size: 0.95rem;
      color: #4b4660;
      font-style: italic;
    }

    .feed-header {
      display: flex;
      align-items: center;
      justify-content: space-between;
    }

    .clear-link {
      background: none;
      border: none;
      color: var(--danger);
      font-size: 0.8rem;
      font-weight: 700;
      text-transform: uppercase;
      cursor: pointer;
    }

    .status {
      font-size: 0.95rem;
      color: #6b6478;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    footer {
      text-align: center;
      color: #8b8599;
      font-size: 0.85rem;
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

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Culture Pulse</h1>
        <p class="subtitle">Anonymous mood check-ins for the whole team.</p>
      </div>
      <div class="tabs" role="tablist">
        <button class="tab active" type="button" data-view="survey" role="tab" aria-selected="true">Submit</button>
        <button class="tab" type="button" data-view="dashboard" role="tab" aria-selected="false">Dashboard</button>
      </div>
    </header>

    <section id="survey-view">
      <div class="card" id="survey-card">
        <div>
          <h2>How's the vibe?</h2>
          <p class="subtitle">Your feedback is 100% anonymous and helps improve our team.</p>
        </div>
        <div class="mood-row" id="mood-row"></div>
        <textarea id="comment" placeholder="Share your thoughts, suggestions, or concerns..."></textarea>
        <button class="primary" id="submit-btn" type="button" disabled>Send Vibe Check</button>
      </div>
      <div class="card hidden" id="thanks-card">
        <div class="thanks">
          <div class="badge">&#10024;</div>
          <h2>Thank you!</h2>
          <p class="subtitle">Your anonymous feedback has been safely delivered.</p>
          <button class="secondary" id="again-btn" type="button">Submit another</button>
          <button class="primary" id="to-dashboard-btn" type="button">View dashboard</button>
        </div>
      </div>
    </section>

    <section id="dashboard-view" class="hidden">
      <div style="display: grid; gap: 20px;">
        <div class="panel">
          <div class="stat">
            <span class="label">Average mood</span>
            <span class="value" id="avg-value">0</span>
          </div>
          <div class="stat">
            <span class="label">Responses</span>
            <span class="value" id="count-value">0</span>
          </div>
        </div>

        <div class="card">
          <h2>Mood distribution</h2>
          <svg id="chart" viewBox="0 0 600 260" aria-label="Mood distribution chart" role="img"></svg>
        </div>

        <button class="magic" id="magic-btn" type="button">&#10024; Magic AI Action Plan</button>

        <div class="card hidden" id="plan-card">
          <h2>&#128161; Management strategy</h2>
          <ol class="plan-list" id="plan-list"></ol>
        </div>

        <div class="card">
          <div class="feed-header">
            <h2>Recent comments</h2>
            <button class="clear-link" id="clear-btn" type="button">Clear all</button>
          </div>
          <div class="feed" id="feed"></div>
        </div>

        <div class="status" id="status"></div>
      </div>
    </section>

    <footer>&copy; 2024 Culture Pulse &bull; 100% Anonymous</footer>
  </main>

  <script>
    const MOODS = [
      { value: 1, emoji: '\u{1F62D}' },
      { value: 2, emoji: '\u{1F615}' },
      { value: 3, emoji: '\u{1F610}' },
      { value: 4, emoji: '\u{1F642}' },
      { value: 5, emoji: '\u{1F929}' }
    ];
    const BAR_COLORS = ['#f43f5e', '#f59e0b', '#fbbf24', '#10b981', '#14b8a6'];

    const moodRow = document.getElementById('mood-row');
    const commentEl = document.getElementById('comment');
    const submitBtn = document.getElementById('submit-btn');
    const surveyCard = document.getElementById('survey-card');
    const thanksCard = document.getElementById('thanks-card');
    const surveyView = document.getElementById('survey-view');
    const dashboardView = document.getElementById('dashboard-view');
    const avgValue = document.getElementById('avg-value');
    const countValue = document.getElementById('count-value');
    const chartEl = document.getElementById('chart');
    const magicBtn = document.getElementById('magic-btn');
    const planCard = document.getElementById('plan-card');
    const planList = document.getElementById('plan-list');
    const feedEl = document.getElementById('feed');
    const clearBtn = document.getElementById('clear-btn');
    const statusEl = document.getElementById('status');
    const tabs = Array.from(document.querySelectorAll('.tab'));

    let selectedMood = 0;
    let entryCount = 0;
    let planBusy = false;

    const emojiFor = (score) => {
      if (score >= 4.5) return '\u{1F929}';
      if (score >= 3.5) return '\u{1F642}';
      if (score >= 2.5) return '\u{1F610}';
      if (score >= 1.5) return '\u{1F615}';
      return '\u{1F62D}';
    };

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    MOODS.forEach((mood) => {
      const button = document.createElement('button');
      button.type = 'button';
      button.className = 'mood-btn';
      button.textContent = mood.emoji;
      const label = document.createElement('span');
      label.textContent = mood.value;
      button.appendChild(label);
      button.addEventListener('click', () => {
        selectedMood = mood.value;
        Array.from(moodRow.children).forEach((child, index) => {
          child.classList.toggle('selected', index + 1 === mood.value);
        });
        submitBtn.disabled = false;
      });
      moodRow.appendChild(button);
    });

    const renderChart = (histogram) => {
      const width = 600;
      const height = 260;
      const paddingX = 44;
      const paddingY = 40;
      const top = 24;

      const max = Math.max(1, ...histogram);
      const slot = (width - paddingX * 2) / histogram.length;
      const barWidth = slot * 0.6;
      const scaleY = (height - top - paddingY) / max;

      let bars = '';
      histogram.forEach((count, index) => {
        const x = paddingX + index * slot + (slot - barWidth) / 2;
        const barHeight = count * scaleY;
        const y = height - paddingY - barHeight;
        bars += `<rect x="${x.toFixed(1)}" y="${y.toFixed(1)}" width="${barWidth.toFixed(1)}" height="${barHeight.toFixed(1)}" rx="6" fill="${BAR_COLORS[index]}" />`;
        bars += `<text class="chart-label" x="${(x + barWidth / 2).toFixed(1)}" y="${(y - 8).toFixed(1)}" text-anchor="middle">${count}</text>`;
        bars += `<text class="chart-label" x="${(x + barWidth / 2).toFixed(1)}" y="${height - paddingY + 22}" text-anchor="middle" font-size="16">${MOODS[index].emoji}</text>`;
      });

      const baseline = `<line class="chart-grid" x1="${paddingX}" y1="${height - paddingY}" x2="${width - paddingX}" y2="${height - paddingY}" />`;
      chartEl.innerHTML = baseline + bars;
    };

    const renderFeed = (entries) => {
      feedEl.innerHTML = '';
      if (!entries.length) {
        const empty = document.createElement('p');
        empty.className = 'feed-empty';
        empty.textContent = 'No feedback received yet.';
        feedEl.appendChild(empty);
        return;
      }

      entries.forEach((entry) => {
        const item = document.createElement('div');
        item.className = 'entry';

        const meta = document.createElement('div');
        meta.className = 'meta';

        const when = document.createElement('span');
        when.className = 'when';
        when.textContent = `${emojiFor(entry.mood)} ${new Date(entry.timestamp).toLocaleDateString()}`;

        const badge = document.createElement('span');
        badge.className = 'badge' + (entry.mood >= 4 ? ' good' : entry.mood <= 2 ? ' bad' : '');
        badge.textContent = `Mood: ${entry.mood}/5`;
        badge.title = entry.label;

        meta.appendChild(when);
        meta.appendChild(badge);

        const comment = document.createElement('p');
        comment.className = 'comment';
        comment.textContent = `"${entry.comment || 'No comment provided'}"`;

        item.appendChild(meta);
        item.appendChild(comment);
        feedEl.appendChild(item);
      });
    };

    const loadStats = async () => {
      const res = await fetch('/api/stats');
      if (!res.ok) {
        throw new Error('Unable to load stats');
      }
      const stats = await res.json();
      entryCount = stats.count;
      avgValue.textContent = `${stats.average.toFixed(1)} ${emojiFor(stats.average)}`;
      countValue.textContent = stats.count;
      renderChart(stats.histogram);
      magicBtn.disabled = planBusy || entryCount === 0;
    };

    const loadEntries = async () => {
      const res = await fetch('/api/entries');
      if (!res.ok) {
        throw new Error('Unable to load entries');
      }
      const payload = await res.json();
      renderFeed(payload.entries);
    };

    const refresh = async () => {
      await Promise.all([loadStats(), loadEntries()]);
    };

    const setView = (view) => {
      tabs.forEach((button) => {
        const isActive = button.dataset.view === view;
        button.classList.toggle('active', isActive);
        button.setAttribute('aria-selected', String(isActive));
      });
      surveyView.classList.toggle('hidden', view !== 'survey');
      dashboardView.classList.toggle('hidden', view !== 'dashboard');
      if (view === 'dashboard') {
        refresh().catch((err) => setStatus(err.message, 'error'));
      }
    };

    tabs.forEach((button) => {
      button.addEventListener('click', () => setView(button.dataset.view));
    });

    submitBtn.addEventListener('click', async () => {
      if (selectedMood === 0) {
        return;
      }
      submitBtn.disabled = true;
      try {
        const res = await fetch('/api/feedback', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({ mood: selectedMood, comment: commentEl.value })
        });
        if (!res.ok) {
          throw new Error((await res.text()) || 'Submission failed');
        }
        surveyCard.classList.add('hidden');
        thanksCard.classList.remove('hidden');
      } catch (err) {
        setStatus(err.message, 'error');
        submitBtn.disabled = false;
      }
    });

    document.getElementById('again-btn').addEventListener('click', () => {
      selectedMood = 0;
      commentEl.value = '';
      Array.from(moodRow.children).forEach((child) => child.classList.remove('selected'));
      submitBtn.disabled = true;
      thanksCard.classList.add('hidden');
      surveyCard.classList.remove('hidden');
    });

    document.getElementById('to-dashboard-btn').addEventListener('click', () => setView('dashboard'));

    magicBtn.addEventListener('click', async () => {
      if (planBusy) {
        return;
      }
      planBusy = true;
      magicBtn.disabled = true;
      magicBtn.textContent = 'Analyzing vibe...';
      try {
        const res = await fetch('/api/action-plan', { method: 'POST' });
        if (!res.ok) {
          throw new Error((await res.text()) || 'Plan request failed');
        }
        const payload = await res.json();
        planList.innerHTML = '';
        payload.points.forEach((point) => {
          const item = document.createElement('li');
          item.textContent = point;
          planList.appendChild(item);
        });
        planCard.classList.remove('hidden');
      } catch (err) {
        setStatus(err.message, 'error');
      } finally {
        planBusy = false;
        magicBtn.textContent = '✨ Magic AI Action Plan';
        magicBtn.disabled = entryCount === 0;
      }
    });

    clearBtn.addEventListener('click', async () => {
      if (!window.confirm('Are you sure you want to clear all data? This cannot be undone.')) {
        return;
      }
      try {
        const res = await fetch('/api/clear', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({ confirm: true })
        });
        if (!res.ok) {
          throw new Error((await res.text()) || 'Clear failed');
        }
        planCard.classList.add('hidden');
        setStatus('All feedback cleared', 'ok');
        setTimeout(() => setStatus('', ''), 1500);
        await refresh();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    setView('survey');
  </script>
</body>
</html>
"#;
