pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Notes Dashboard</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&display=swap');

    :root {
      --bg-1: #f4f6fb;
      --bg-2: #dbe4f7;
      --ink: #24292f;
      --accent: #3a6ea5;
      --accent-2: #c05b4d;
      --muted: #6b7280;
      --card: rgba(255, 255, 255, 0.92);
      --shadow: 0 20px 48px rgba(36, 52, 84, 0.14);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 55%),
        linear-gradient(135deg, var(--bg-1), #eef2fa 70%);
      color: var(--ink);
      font-family: 'Space Grotesk', 'Trebuchet MS', sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      display: grid;
      gap: 24px;
      animation: rise 500ms ease;
    }

    header h1 {
      margin: 0;
      font-size: 1.8rem;
    }

    .subtitle {
      margin: 4px 0 0;
      color: var(--muted);
      font-size: 0.95rem;
    }

    .card {
      background: var(--card);
      border-radius: 20px;
      box-shadow: var(--shadow);
      padding: 24px;
    }

    .summary {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat .label {
      display: block;
      color: var(--muted);
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.06em;
    }

    .stat .value {
      font-size: 2rem;
      font-weight: 600;
    }

    .charts {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
      gap: 24px;
    }

    .card h2 {
      margin: 0 0 4px;
      font-size: 1.05rem;
    }

    .card .description {
      margin: 0 0 16px;
      color: var(--muted);
      font-size: 0.85rem;
    }

    svg {
      width: 100%;
      height: auto;
    }

    .chart-grid {
      stroke: rgba(36, 52, 84, 0.12);
    }

    .chart-label {
      fill: var(--muted);
      font-size: 11px;
    }

    .chart-bar {
      fill: var(--accent);
    }

    .chart-line {
      fill: none;
      stroke: var(--accent-2);
      stroke-width: 2;
    }

    .chart-dot {
      fill: var(--accent-2);
    }

    .empty {
      color: var(--muted);
      font-size: 0.9rem;
      margin: 24px 0;
      text-align: center;
    }

    .tabs {
      display: inline-flex;
      gap: 6px;
      margin-bottom: 16px;
    }

    .tab {
      border: 1px solid rgba(36, 52, 84, 0.2);
      background: transparent;
      border-radius: 999px;
      padding: 6px 14px;
      font: inherit;
      font-size: 0.85rem;
      cursor: pointer;
      color: var(--muted);
    }

    .tab.active {
      background: var(--accent);
      border-color: var(--accent);
      color: #fff;
    }

    .toolbar {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
      flex-wrap: wrap;
    }

    .refresh {
      border: none;
      border-radius: 999px;
      padding: 10px 20px;
      font: inherit;
      font-weight: 600;
      color: #fff;
      background: var(--accent);
      cursor: pointer;
    }

    .refresh:disabled {
      opacity: 0.6;
      cursor: wait;
    }

    .status {
      font-size: 0.9rem;
      color: var(--muted);
      min-height: 1.2em;
    }

    .status[data-type='error'] {
      color: #c63b2b;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(16px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header class="toolbar">
      <div>
        <h1>Notes Dashboard</h1>
        <p class="subtitle">A deeper look at your note-taking habits.</p>
      </div>
      <button class="refresh" id="refresh-btn" type="button">Refresh</button>
    </header>

    <div class="status" id="status">Loading analytics...</div>

    <section class="card">
      <div class="summary">
        <div class="stat">
          <span class="label">Total Notes</span>
          <span class="value" id="total">0</span>
        </div>
        <div class="stat">
          <span class="label">Pinned Notes</span>
          <span class="value" id="pinned">0</span>
        </div>
        <div class="stat">
          <span class="label">Favorites</span>
          <span class="value" id="favorites">0</span>
        </div>
      </div>
    </section>

    <section class="card">
      <h2>Tag distribution</h2>
      <p class="description">Most frequently used tags</p>
      <svg id="tag-chart" viewBox="0 0 600 240" role="img" aria-label="Tag distribution"></svg>
      <p class="empty" id="tag-empty" hidden>No tags yet.</p>
    </section>

    <div class="charts">
      <section class="card">
        <h2>Weekly activity</h2>
        <p class="description">Notes created per week</p>
        <svg id="weekly-chart" viewBox="0 0 600 240" role="img" aria-label="Weekly activity"></svg>
        <p class="empty" id="weekly-empty" hidden>No notes yet.</p>
      </section>

      <section class="card">
        <h2>Monthly trend</h2>
        <p class="description">Overview of notes per month</p>
        <svg id="monthly-chart" viewBox="0 0 600 240" role="img" aria-label="Monthly trend"></svg>
        <p class="empty" id="monthly-empty" hidden>No notes yet.</p>
      </section>
    </div>

    <section class="card">
      <h2>Admin timelines</h2>
      <p class="description">Notes and active users over time (admin only)</p>
      <div class="tabs" role="tablist">
        <button class="tab active" type="button" data-range="weekly" role="tab">Weekly</button>
        <button class="tab" type="button" data-range="monthly" role="tab">Monthly</button>
        <button class="tab" type="button" data-range="yearly" role="tab">Yearly</button>
      </div>
      <div class="charts">
        <div>
          <h2>Notes timeline</h2>
          <svg id="admin-notes-chart" viewBox="0 0 600 240" role="img" aria-label="Notes timeline"></svg>
          <p class="empty" id="admin-notes-empty" hidden>No data for this range.</p>
        </div>
        <div>
          <h2>User timeline</h2>
          <svg id="admin-users-chart" viewBox="0 0 600 240" role="img" aria-label="User timeline"></svg>
          <p class="empty" id="admin-users-empty" hidden>No data for this range.</p>
        </div>
      </div>
      <p class="empty" id="admin-empty" hidden>Admin analytics unavailable.</p>
    </section>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const refreshBtn = document.getElementById('refresh-btn');
    const totalEl = document.getElementById('total');
    const pinnedEl = document.getElementById('pinned');
    const favoritesEl = document.getElementById('favorites');
    const rangeTabs = Array.from(document.querySelectorAll('.tab'));

    let activeRange = 'weekly';

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const chart = (id) => ({
      svg: document.getElementById(id + '-chart'),
      empty: document.getElementById(id + '-empty'),
    });

    const width = 600;
    const height = 240;
    const paddingX = 44;
    const paddingY = 34;
    const top = 20;

    const scale = (points) => {
      const max = Math.max(1, ...points.map((p) => p.count));
      return (count) => height - paddingY - ((height - top - paddingY) * count) / max;
    };

    const axisLabels = (points, x) => {
      const every = points.length > 8 ? 2 : 1;
      return points
        .map((point, index) => {
          if (index % every !== 0) {
            return '';
          }
          return `<text class='chart-label' x='${x(index)}' y='${height - paddingY + 18}' text-anchor='middle'>${point.label}</text>`;
        })
        .join('');
    };

    const renderBars = (panel, points) => {
      panel.empty.hidden = points.length > 0;
      panel.svg.style.display = points.length ? '' : 'none';
      if (!points.length) {
        panel.svg.innerHTML = '';
        return;
      }
      const y = scale(points);
      const slot = (width - paddingX * 2) / points.length;
      const barWidth = Math.min(48, slot * 0.6);
      const x = (index) => paddingX + slot * index + (slot - barWidth) / 2;
      const bars = points
        .map((point, index) =>
          `<rect class='chart-bar' x='${x(index).toFixed(1)}' y='${y(point.count).toFixed(1)}' width='${barWidth.toFixed(1)}' height='${(height - paddingY - y(point.count)).toFixed(1)}' rx='4'></rect>`)
        .join('');
      const baseline = `<line class='chart-grid' x1='${paddingX}' y1='${height - paddingY}' x2='${width - paddingX}' y2='${height - paddingY}'></line>`;
      panel.svg.innerHTML = baseline + bars + axisLabels(points, (i) => paddingX + slot * i + slot / 2);
    };

    const renderLine = (panel, points) => {
      panel.empty.hidden = points.length > 0;
      panel.svg.style.display = points.length ? '' : 'none';
      if (!points.length) {
        panel.svg.innerHTML = '';
        return;
      }
      const y = scale(points);
      const xStep = points.length > 1 ? (width - paddingX * 2) / (points.length - 1) : 0;
      const x = (index) => paddingX + xStep * index;
      const path = points
        .map((point, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(1)} ${y(point.count).toFixed(1)}`)
        .join(' ');
      const dots = points
        .map((point, index) => `<circle class='chart-dot' cx='${x(index).toFixed(1)}' cy='${y(point.count).toFixed(1)}' r='3'></circle>`)
        .join('');
      const baseline = `<line class='chart-grid' x1='${paddingX}' y1='${height - paddingY}' x2='${width - paddingX}' y2='${height - paddingY}'></line>`;
      panel.svg.innerHTML = baseline + `<path class='chart-line' d='${path}'></path>` + dots + axisLabels(points, x);
    };

    const loadAnalytics = async () => {
      const res = await fetch('/api/analytics');
      if (!res.ok) {
        throw new Error(await res.text() || 'Failed to load analytics');
      }
      const data = await res.json();
      totalEl.textContent = data.snapshot.total;
      pinnedEl.textContent = data.snapshot.pinned;
      favoritesEl.textContent = data.snapshot.favorites;
      renderBars(chart('tag'), data.charts.tags.map((t) => ({ label: t.tag, count: t.count })));
      renderLine(chart('weekly'), data.charts.weekly);
      renderBars(chart('monthly'), data.charts.monthly);
    };

    const loadTimelines = async () => {
      const adminEmpty = document.getElementById('admin-empty');
      try {
        const res = await fetch('/api/admin/timeline?range=' + activeRange);
        if (!res.ok) {
          throw new Error(await res.text() || 'Failed to load timelines');
        }
        const data = await res.json();
        adminEmpty.hidden = true;
        renderLine(chart('admin-notes'), data.notes);
        renderLine(chart('admin-users'), data.users);
      } catch (err) {
        adminEmpty.hidden = false;
        renderLine(chart('admin-notes'), []);
        renderLine(chart('admin-users'), []);
      }
    };

    const refresh = async () => {
      refreshBtn.disabled = true;
      setStatus('Loading analytics...', '');
      try {
        const res = await fetch('/api/refresh', { method: 'POST' });
        if (!res.ok) {
          throw new Error(await res.text() || 'Refresh failed');
        }
        await loadAnalytics();
        await loadTimelines();
        setStatus('', '');
      } catch (err) {
        setStatus(err.message, 'error');
      } finally {
        refreshBtn.disabled = false;
      }
    };

    rangeTabs.forEach((button) => {
      button.addEventListener('click', () => {
        activeRange = button.dataset.range;
        rangeTabs.forEach((tab) => tab.classList.toggle('active', tab === button));
        loadTimelines().catch((err) => setStatus(err.message, 'error'));
      });
    });

    refreshBtn.addEventListener('click', () => {
      refresh();
    });

    refresh();
  </script>
</body>
</html>
"#;
