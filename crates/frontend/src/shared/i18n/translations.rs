//! Static UI string catalog.
//!
//! Columns are ordered as [`Locale::all`]: ar, en, fr, es, ru.

use contracts::enums::Locale;

type Row = (&'static str, [&'static str; 5]);

const CATALOG: &[Row] = &[
    // Pagination
    ("pagination.previousPage", ["الصفحة السابقة", "Previous page", "Page précédente", "Página anterior", "Предыдущая страница"]),
    ("pagination.nextPage", ["الصفحة التالية", "Next page", "Page suivante", "Página siguiente", "Следующая страница"]),
    ("pagination.goToPage", ["انتقل إلى الصفحة", "Go to page", "Aller à la page", "Ir a la página", "Перейти на страницу"]),
    ("pagination.of", ["من", "of", "sur", "de", "из"]),
    // Common
    ("common.search", ["بحث", "Search", "Rechercher", "Buscar", "Поиск"]),
    ("common.all", ["الكل", "All", "Tous", "Todos", "Все"]),
    ("common.allStatuses", ["كل الحالات", "All statuses", "Tous les statuts", "Todos los estados", "Все статусы"]),
    ("common.allRoles", ["كل الأدوار", "All roles", "Tous les rôles", "Todos los roles", "Все роли"]),
    ("common.allCampaigns", ["كل الحملات", "All campaigns", "Toutes les campagnes", "Todas las campañas", "Все кампании"]),
    ("common.sortBy", ["ترتيب حسب", "Sort by", "Trier par", "Ordenar por", "Сортировка"]),
    ("common.newest", ["الأحدث", "Newest", "Plus récentes", "Más recientes", "Новые"]),
    ("common.oldest", ["الأقدم", "Oldest", "Plus anciennes", "Más antiguas", "Старые"]),
    ("common.mostRaised", ["الأكثر جمعاً", "Most raised", "Plus collectées", "Más recaudado", "Больше собрано"]),
    ("common.leastRaised", ["الأقل جمعاً", "Least raised", "Moins collectées", "Menos recaudado", "Меньше собрано"]),
    ("common.highestGoal", ["أعلى هدف", "Highest goal", "Objectif le plus élevé", "Meta más alta", "Наибольшая цель"]),
    ("common.clearFilters", ["مسح المرشحات", "Clear filters", "Effacer les filtres", "Borrar filtros", "Сбросить фильтры"]),
    ("common.activeFilters", ["المرشحات النشطة", "Active filters", "Filtres actifs", "Filtros activos", "Активные фильтры"]),
    ("common.loading", ["جاري التحميل...", "Loading...", "Chargement...", "Cargando...", "Загрузка..."]),
    ("common.retry", ["إعادة المحاولة", "Retry", "Réessayer", "Reintentar", "Повторить"]),
    ("common.noResults", ["لا توجد نتائج", "No results", "Aucun résultat", "Sin resultados", "Нет результатов"]),
    ("common.total", ["المجموع", "Total", "Total", "Total", "Всего"]),
    ("messages.errorLoadingData", ["خطأ في تحميل البيانات", "Error loading data", "Erreur de chargement des données", "Error al cargar los datos", "Ошибка загрузки данных"]),
    // Navigation
    ("nav.campaigns", ["الحملات", "Campaigns", "Campagnes", "Campañas", "Кампании"]),
    ("nav.adminCampaigns", ["إدارة الحملات", "Manage campaigns", "Gérer les campagnes", "Gestionar campañas", "Управление кампаниями"]),
    ("nav.adminUsers", ["المستخدمون", "Users", "Utilisateurs", "Usuarios", "Пользователи"]),
    ("nav.adminDonations", ["التبرعات", "Donations", "Dons", "Donaciones", "Пожертвования"]),
    // Campaigns
    ("campaign.searchPlaceholder", ["البحث عن حملة...", "Search campaigns...", "Rechercher une campagne...", "Buscar campañas...", "Поиск кампаний..."]),
    ("campaign.title", ["العنوان", "Title", "Titre", "Título", "Название"]),
    ("campaign.raised", ["تم جمع", "Raised", "Collecté", "Recaudado", "Собрано"]),
    ("campaign.goal", ["الهدف", "Goal", "Objectif", "Meta", "Цель"]),
    ("campaign.createdAt", ["تاريخ الإنشاء", "Created", "Créée le", "Creada", "Создана"]),
    ("campaign.status.label", ["الحالة", "Status", "Statut", "Estado", "Статус"]),
    ("campaign.status.draft", ["مسودة", "Draft", "Brouillon", "Borrador", "Черновик"]),
    ("campaign.status.pending", ["قيد المراجعة", "Pending", "En attente", "Pendiente", "На проверке"]),
    ("campaign.status.active", ["نشطة", "Active", "Active", "Activa", "Активна"]),
    ("campaign.status.completed", ["مكتملة", "Completed", "Terminée", "Completada", "Завершена"]),
    ("campaign.status.cancelled", ["ملغاة", "Cancelled", "Annulée", "Cancelada", "Отменена"]),
    // Users
    ("user.searchPlaceholder", ["بحث عن مستخدم...", "Search users...", "Rechercher un utilisateur...", "Buscar usuarios...", "Поиск пользователей..."]),
    ("user.username", ["اسم المستخدم", "Username", "Nom d'utilisateur", "Usuario", "Логин"]),
    ("user.email", ["البريد الإلكتروني", "Email", "E-mail", "Correo", "Эл. почта"]),
    ("user.fullName", ["الاسم الكامل", "Full name", "Nom complet", "Nombre completo", "ФИО"]),
    ("user.role.label", ["الدور", "Role", "Rôle", "Rol", "Роль"]),
    ("user.role.admin", ["مدير", "Admin", "Administrateur", "Administrador", "Администратор"]),
    ("user.role.user", ["مستخدم", "User", "Utilisateur", "Usuario", "Пользователь"]),
    ("user.status.active", ["نشط", "Active", "Actif", "Activo", "Активен"]),
    ("user.status.inactive", ["معلق", "Suspended", "Suspendu", "Suspendido", "Заблокирован"]),
    ("admin.activate", ["تنشيط", "Activate", "Activer", "Activar", "Активировать"]),
    ("admin.suspend", ["تعليق", "Suspend", "Suspendre", "Suspender", "Заблокировать"]),
    // Donations
    ("donation.searchPlaceholder", ["البحث في التبرعات...", "Search donations...", "Rechercher des dons...", "Buscar donaciones...", "Поиск пожертвований..."]),
    ("donation.amount", ["المبلغ", "Amount", "Montant", "Importe", "Сумма"]),
    ("donation.donor", ["المتبرع", "Donor", "Donateur", "Donante", "Жертвователь"]),
    ("donation.campaign", ["الحملة", "Campaign", "Campagne", "Campaña", "Кампания"]),
    ("donation.date", ["التاريخ", "Date", "Date", "Fecha", "Дата"]),
    ("donation.anonymous", ["متبرع مجهول", "Anonymous", "Anonyme", "Anónimo", "Аноним"]),
    ("donation.status.pending", ["قيد الانتظار", "Pending", "En attente", "Pendiente", "Ожидает"]),
    ("donation.status.completed", ["مكتمل", "Completed", "Terminé", "Completado", "Завершено"]),
    ("donation.status.failed", ["فشل", "Failed", "Échoué", "Fallido", "Ошибка"]),
    ("donation.status.refunded", ["مسترد", "Refunded", "Remboursé", "Reembolsado", "Возвращено"]),
    ("donation.status.unknown", ["غير معروف", "Unknown", "Inconnu", "Desconocido", "Неизвестно"]),
];

fn column(locale: Locale) -> usize {
    match locale {
        Locale::Ar => 0,
        Locale::En => 1,
        Locale::Fr => 2,
        Locale::Es => 3,
        Locale::Ru => 4,
    }
}

/// Catalog entry for `key`, if present
pub fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
    CATALOG
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, texts)| texts[column(locale)])
        .filter(|text| !text.is_empty())
}

/// Text for `key`, falling back to English and then to the key itself
pub fn translate(locale: Locale, key: &str) -> String {
    lookup(locale, key)
        .or_else(|| lookup(Locale::En, key))
        .map(str::to_string)
        .unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_translate_known_key() {
        assert_eq!(translate(Locale::Fr, "common.search"), "Rechercher");
        assert_eq!(translate(Locale::Ar, "common.all"), "الكل");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(translate(Locale::Ru, "no.such.key"), "no.such.key");
    }

    #[test]
    fn test_catalog_keys_unique_and_complete() {
        let mut seen = HashSet::new();
        for (key, texts) in CATALOG {
            assert!(seen.insert(*key), "duplicate key {key}");
            assert!(texts.iter().all(|t| !t.is_empty()), "missing text for {key}");
        }
    }
}
