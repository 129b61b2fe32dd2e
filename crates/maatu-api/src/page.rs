//! Embedded chat page served at `GET /`.

/// Self-contained chat page: language selector, message box, and a
/// speak button that plays the synthesized reply. No build step, no
/// external assets.
pub const CHAT_PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Maatu</title>
<style>
  body { font-family: system-ui, sans-serif; max-width: 640px; margin: 2rem auto; padding: 0 1rem; background: #f7f7f8; }
  h1 { font-size: 1.3rem; }
  #log { border: 1px solid #ddd; border-radius: 8px; background: #fff; padding: 1rem; height: 380px; overflow-y: auto; }
  .human { text-align: right; color: #1a4d8f; margin: .4rem 0; }
  .assistant { text-align: left; color: #222; margin: .4rem 0; }
  form { display: flex; gap: .5rem; margin-top: 1rem; }
  input[type=text] { flex: 1; padding: .5rem; border: 1px solid #ccc; border-radius: 6px; }
  select, button { padding: .5rem .8rem; border-radius: 6px; border: 1px solid #ccc; background: #fff; cursor: pointer; }
  .error { color: #a00; }
</style>
</head>
<body>
<h1>Maatu &mdash; English / ಕನ್ನಡ chat</h1>
<div id="log"></div>
<form id="chat">
  <select id="language">
    <option value="english">English</option>
    <option value="kannada">ಕನ್ನಡ</option>
  </select>
  <input type="text" id="message" placeholder="Type a message" autocomplete="off">
  <button type="submit">Send</button>
  <button type="button" id="speak">Speak</button>
</form>
<script>
const log = document.getElementById('log');
let lastReply = '';

function append(cls, text) {
  const div = document.createElement('div');
  div.className = cls;
  div.textContent = text;
  log.appendChild(div);
  log.scrollTop = log.scrollHeight;
}

document.getElementById('chat').addEventListener('submit', async (ev) => {
  ev.preventDefault();
  const box = document.getElementById('message');
  const message = box.value.trim();
  if (!message) return;
  const language = document.getElementById('language').value;
  append('human', message);
  box.value = '';
  try {
    const resp = await fetch('/chat', {
      method: 'POST',
      headers: {'Content-Type': 'application/json'},
      body: JSON.stringify({message, language, input_type: 'text'})
    });
    const data = await resp.json();
    if (!resp.ok) throw new Error(data.message || 'request failed');
    lastReply = data.response;
    append('assistant', data.response);
  } catch (err) {
    append('assistant error', 'Error: ' + err.message);
  }
});

document.getElementById('speak').addEventListener('click', async () => {
  if (!lastReply) return;
  const language = document.getElementById('language').value;
  const resp = await fetch('/text-to-speech', {
    method: 'POST',
    headers: {'Content-Type': 'application/json'},
    body: JSON.stringify({text: lastReply, language})
  });
  if (!resp.ok) return;
  const data = await resp.json();
  new Audio('data:audio/wav;base64,' + data.audio_data).play();
});
</script>
</body>
</html>
"#;
