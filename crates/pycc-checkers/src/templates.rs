//! Configuration file templates shipped with the built-in checkers.

pub(crate) const BLACK_PYPROJECT: &str = r"[tool.black]
line-length = 88
target-version = ['py37']
include = '\.pyi?$'
extend-exclude = '''
/(
  # directories
  \.eggs
  | \.git
  | \.hg
  | \.mypy_cache
  | \.tox
  | \.venv
  | build
  | dist
)/
'''
";

pub(crate) const ISORT_PYPROJECT: &str = r#"[tool.isort]
profile = "black"
multi_line_output = 3
line_length = 88
known_first_party = ["your_package_name"]
"#;

pub(crate) const FLAKE8: &str = r"[flake8]
max-line-length = 88
extend-ignore = E203, W503
exclude =
    .git,
    __pycache__,
    .venv,
    build,
    dist,
    *.egg-info
";

pub(crate) const PYLINT_PYPROJECT: &str = r#"[tool.pylint.messages_control]
disable = [
    "C0114",  # missing-module-docstring
    "C0115",  # missing-class-docstring
    "C0116",  # missing-function-docstring
]

[tool.pylint.format]
max-line-length = 88

[tool.pylint.design]
max-args = 10
max-attributes = 10
max-bool-expr = 5
max-branches = 12
max-locals = 15
max-parents = 7
max-public-methods = 20
max-returns = 6
max-statements = 50
"#;

pub(crate) const MYPY_PYPROJECT: &str = r#"[tool.mypy]
python_version = "3.8"
warn_return_any = true
warn_unused_configs = true
disallow_untyped_defs = true
disallow_incomplete_defs = true
check_untyped_defs = true
disallow_untyped_decorators = true
no_implicit_optional = true
warn_redundant_casts = true
warn_unused_ignores = true
warn_no_return = true
warn_unreachable = true
strict_equality = true

[[tool.mypy.overrides]]
module = [
    "tests.*",
]
disallow_untyped_defs = false
"#;

pub(crate) const BANDIT: &str = r"exclude_dirs: ['tests', 'test', 'testsuite']
skips: ['B101', 'B601']
";

pub(crate) const PYDOCSTYLE_PYPROJECT: &str = r#"[tool.pydocstyle]
convention = "google"
add_select = ["D100", "D104", "D105", "D106", "D107"]
add_ignore = ["D100", "D104"]
"#;

pub(crate) const PROJECT_PYPROJECT: &str = r#"[build-system]
requires = ["setuptools>=45", "wheel"]
build-backend = "setuptools.build_meta"

[project]
name = "your-project-name"
version = "0.1.0"
description = "Your project description"
readme = "README.md"
requires-python = ">=3.8"
license = {text = "MIT"}
authors = [
    {name = "Your Name", email = "you@example.com"}
]
classifiers = [
    "Development Status :: 3 - Alpha",
    "Intended Audience :: Developers",
    "Programming Language :: Python :: 3",
    "Programming Language :: Python :: 3.8",
    "Programming Language :: Python :: 3.9",
    "Programming Language :: Python :: 3.10",
    "Programming Language :: Python :: 3.11",
    "Programming Language :: Python :: 3.12",
]
dependencies = []

[project.optional-dependencies]
dev = [
    "black>=22.0.0",
    "isort>=5.0.0",
    "flake8>=4.0.0",
    "pylint>=2.12.0",
    "mypy>=0.950",
    "bandit>=1.7.0",
    "safety>=1.10.0",
    "pydocstyle>=6.0.0",
    "vulture>=2.0.0",
    "radon>=5.0.0",
    "pytest>=6.0.0",
    "pytest-cov>=3.0.0",
]

[tool.pytest.ini_options]
minversion = "6.0"
addopts = "-ra -q"
testpaths = [
    "tests",
]
python_files = ["test_*.py", "*_test.py"]
python_classes = ["Test*"]
python_functions = ["test_*"]

[tool.coverage.run]
source = ["your_package_name"]
omit = [
    "*/tests/*",
    "*/test_*",
    "*/__pycache__/*",
]

[tool.coverage.report]
exclude_lines = [
    "pragma: no cover",
    "def __repr__",
    "if self.debug:",
    "if settings.DEBUG",
    "raise AssertionError",
    "raise NotImplementedError",
    "if 0:",
    "if __name__ == .__main__.:",
    "class .*\\bProtocol\\):",
    "@(abc\\.)?abstractmethod",
]
"#;

pub(crate) const SETUP_CFG: &str = r"[metadata]
name = your-project-name
version = 0.1.0
description = Your project description
long_description = file: README.md
long_description_content_type = text/markdown
classifiers =
    Development Status :: 3 - Alpha
    Intended Audience :: Developers
    Programming Language :: Python :: 3
license = MIT

[options]
packages = find:
python_requires = >=3.8

[options.packages.find]
include = your_package_name*

[options.extras_require]
dev =
    black>=22.0.0
    isort>=5.0.0
    flake8>=4.0.0
    pylint>=2.12.0
    mypy>=0.950
    bandit>=1.7.0
    safety>=1.10.0
    pydocstyle>=6.0.0
    vulture>=2.0.0
    radon>=5.0.0
    pytest>=6.0.0
    pytest-cov>=3.0.0

[coverage:run]
source = your_package_name
omit =
    */tests/*
    */test_*
    */__pycache__/*

[coverage:report]
exclude_lines =
    pragma: no cover
    def __repr__
    raise AssertionError
    raise NotImplementedError
    if __name__ == .__main__.:
";

pub(crate) const PIPFILE: &str = r#"[[source]]
url = "https://pypi.org/simple"
verify_ssl = true
name = "pypi"

[packages]
# Add your main dependencies here
# example-package = "*"

[dev-packages]
black = ">=22.0.0"
isort = ">=5.0.0"
flake8 = ">=4.0.0"
pylint = ">=2.12.0"
mypy = ">=0.950"
bandit = ">=1.7.0"
safety = ">=1.10.0"
pydocstyle = ">=6.0.0"
vulture = ">=2.0.0"
radon = ">=5.0.0"
pytest = ">=6.0.0"
pytest-cov = ">=3.0.0"

[requires]
python_version = "3.8"

[scripts]
test = "pytest tests/ -v"
lint = "flake8 ."
format = "black ."
sort-imports = "isort ."
"#;
