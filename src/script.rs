//! Client script template.
//!
//! `{{token}}` placeholders are interpolated by the fragment generator
//! from the shared parameter set; the template carries no cryptographic or
//! structural literals of its own. The decrypt routine and the TOC pass
//! mirror their native twins in `decrypt` and `toc`.

pub const CLIENT_SCRIPT: &str = r##"
const PROTECTED_BUNDLE = {{bundle}};
const KDF_ITERATIONS = {{iterations}};
const KEY_BYTES = {{key_bytes}};
const CONTENT_SELECTORS = {{content_selectors}};
const TOC_SELECTORS = {{toc_selectors}};
const TOC_MODE = '{{toc_mode}}';
const HEADING_ID_PREFIX = '{{heading_id_prefix}}';

const passwordInput = document.getElementById('password-input');
const unlockButton = document.getElementById('unlock-button');
const errorBox = document.getElementById('unlock-error');
let unlockInFlight = false;

function fromBase64(text) {
  return Uint8Array.from(atob(text), c => c.charCodeAt(0));
}

async function deriveKey(password, salt) {
  const material = await crypto.subtle.importKey(
    'raw', new TextEncoder().encode(password), { name: 'PBKDF2' }, false, ['deriveBits']);
  const bits = await crypto.subtle.deriveBits(
    { name: 'PBKDF2', salt: salt, iterations: KDF_ITERATIONS, hash: 'SHA-256' },
    material, KEY_BYTES * 8);
  return new Uint8Array(bits);
}

async function decryptBundle(password) {
  const salt = fromBase64(PROTECTED_BUNDLE.salt);
  const iv = fromBase64(PROTECTED_BUNDLE.iv);
  const tag = fromBase64(PROTECTED_BUNDLE.authTag);
  const ciphertext = fromBase64(PROTECTED_BUNDLE.encrypted);

  const rawKey = await deriveKey(password, salt);
  const key = await crypto.subtle.importKey(
    'raw', rawKey, { name: 'AES-GCM' }, false, ['decrypt']);

  const sealed = new Uint8Array(ciphertext.length + tag.length);
  sealed.set(ciphertext);
  sealed.set(tag, ciphertext.length);

  const plaintext = await crypto.subtle.decrypt(
    { name: 'AES-GCM', iv: iv, tagLength: 128 }, key, sealed);
  return new TextDecoder().decode(plaintext);
}

function findContainer() {
  for (const selector of CONTENT_SELECTORS) {
    const el = document.querySelector(selector);
    if (el) return el;
  }
  return null;
}

function revealContent(content) {
  const container = findContainer();
  if (container) {
    container.innerHTML = content;
  } else {
    document.getElementById('{{placeholder_id}}').outerHTML = content;
  }
}

function collectHeadings() {
  const scope = findContainer() || document.body;
  const nodes = scope.querySelectorAll('h1, h2, h3, h4, h5, h6');
  const headings = [];
  nodes.forEach((node, index) => {
    if (!node.id) node.id = HEADING_ID_PREFIX + index;
    headings.push({
      level: parseInt(node.tagName.charAt(1), 10),
      text: node.textContent,
      id: node.id
    });
  });
  return headings;
}

function renderHierarchical(headings) {
  const minLevel = Math.min(...headings.map(h => h.level));
  const counters = [0, 0, 0, 0, 0, 0];
  let html = '<ol class="toc">';
  let current = 0;

  for (const h of headings) {
    const depth = h.level - minLevel + 1;
    counters[h.level - 1] += 1;
    for (let i = h.level; i < 6; i++) counters[i] = 0;

    let number = '';
    for (let level = minLevel; level <= h.level; level++) {
      if (counters[level - 1] > 0) number += counters[level - 1] + '.';
    }

    if (current === 0) {
      for (let i = 1; i < depth; i++) html += '<li class="toc-item"><ol class="toc-child">';
    } else if (depth > current) {
      html += '<ol class="toc-child">';
      for (let i = current + 1; i < depth; i++) html += '<li class="toc-item"><ol class="toc-child">';
    } else {
      html += '</li>';
      for (let i = depth; i < current; i++) html += '</ol></li>';
    }

    html += '<li class="toc-item toc-level-' + h.level + '">' +
      '<a class="toc-link" href="#' + h.id + '">' +
      '<span class="toc-number">' + number + '</span> ' +
      '<span class="toc-text">' + h.text + '</span></a>';
    current = depth;
  }

  html += '</li>';
  for (let i = 1; i < current; i++) html += '</ol></li>';
  return html + '</ol>';
}

function renderGeneric(headings) {
  const base = headings[0].level;
  let html = '<ul>';
  let current = 0;

  for (const h of headings) {
    const depth = h.level > base ? h.level - base + 1 : 1;

    if (current === 0) {
      for (let i = 1; i < depth; i++) html += '<li><ul>';
    } else if (depth > current) {
      html += '<ul>';
      for (let i = current + 1; i < depth; i++) html += '<li><ul>';
    } else {
      html += '</li>';
      for (let i = depth; i < current; i++) html += '</ul></li>';
    }

    html += '<li><a href="#' + h.id + '">' + h.text + '</a>';
    current = depth;
  }

  html += '</li>';
  for (let i = 1; i < current; i++) html += '</ul></li>';
  return html + '</ul>';
}

function rebuildToc() {
  const tocElements = [];
  for (const selector of TOC_SELECTORS) {
    document.querySelectorAll(selector).forEach(el => {
      if (!tocElements.includes(el)) tocElements.push(el);
    });
  }
  if (tocElements.length === 0) return;

  const headings = collectHeadings();
  if (headings.length === 0) {
    tocElements.forEach(el => { el.style.display = 'none'; });
    return;
  }

  const html = TOC_MODE === 'hierarchical'
    ? renderHierarchical(headings)
    : renderGeneric(headings);
  tocElements.forEach(el => {
    el.style.display = '';
    if (el.tagName === 'OL' || el.tagName === 'UL') {
      el.outerHTML = html;
    } else {
      el.innerHTML = html;
    }
  });
}

function showError(message) {
  errorBox.textContent = message;
  errorBox.hidden = false;
}

async function unlock() {
  if (unlockInFlight) return;
  const password = passwordInput.value;
  if (!password) {
    showError('{{empty_password_msg}}');
    return;
  }
  unlockInFlight = true;
  unlockButton.disabled = true;
  errorBox.hidden = true;
  try {
    const content = await decryptBundle(password);
    revealContent(content);
    // The TOC pass must observe the swapped-in content; defer one turn.
    setTimeout(rebuildToc, 0);
  } catch (err) {
    showError('{{wrong_password_msg}}');
    unlockInFlight = false;
    unlockButton.disabled = false;
  }
}

unlockButton.addEventListener('click', unlock);
passwordInput.addEventListener('keydown', event => {
  if (event.key === 'Enter') unlock();
});
"##;
